//! Horizontal (per-column) scalar field.

use crate::types::{ColumnIndex, HorizontalExtent};

/// One value per water column, e.g. mixed-layer depth.
///
/// # Example
///
/// ```
/// use bgc_rs::field::ColumnField;
/// use bgc_rs::types::HorizontalExtent;
///
/// let h = ColumnField::from_fn(HorizontalExtent::new(3, 1), |i, _| 10.0 * i as f64);
/// assert_eq!(h.get(2, 0), 20.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnField {
    extent: HorizontalExtent,
    data: Vec<f64>,
}

impl ColumnField {
    /// Field with every column set to `value`.
    pub fn filled(extent: HorizontalExtent, value: f64) -> Self {
        Self {
            extent,
            data: vec![value; extent.n_columns()],
        }
    }

    /// Zero field.
    pub fn zeros(extent: HorizontalExtent) -> Self {
        Self::filled(extent, 0.0)
    }

    /// Field with column (i, j) set to `f(i, j)`.
    pub fn from_fn<F>(extent: HorizontalExtent, f: F) -> Self
    where
        F: Fn(usize, usize) -> f64,
    {
        let data = extent
            .columns()
            .map(|c| {
                let (i, j) = extent.column_ij(c);
                f(i, j)
            })
            .collect();
        Self { extent, data }
    }

    /// Horizontal extent.
    #[inline]
    pub fn extent(&self) -> HorizontalExtent {
        self.extent
    }

    /// Value at (i, j).
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.extent.column_index(i, j)]
    }

    /// Set value at (i, j).
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let c = self.extent.column_index(i, j);
        self.data[c] = value;
    }

    /// Value of a column by flat index.
    #[inline]
    pub fn at(&self, column: ColumnIndex) -> f64 {
        self.data[column]
    }

    /// All values in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// All values in storage order, mutable.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}
