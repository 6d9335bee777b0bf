//! Cell-centered 3D scalar field.

use crate::grid::ColumnGrid;
use crate::types::{ColumnIndex, HorizontalExtent};

/// Scalar value per (i, j, k) cell, stored column by column.
///
/// # Example
///
/// ```
/// use bgc_rs::field::Field3D;
/// use bgc_rs::types::HorizontalExtent;
///
/// let mut p = Field3D::zeros(HorizontalExtent::new(2, 2), 3);
/// p.set(1, 0, 2, 0.5);
/// assert_eq!(p.get(1, 0, 2), 0.5);
/// assert_eq!(p.column_at(1, 0), &[0.0, 0.0, 0.5]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Field3D {
    extent: HorizontalExtent,
    n_layers: usize,
    /// Column-contiguous values: [column][layer].
    data: Vec<f64>,
}

impl Field3D {
    /// Field with every cell set to `value`.
    pub fn filled(extent: HorizontalExtent, n_layers: usize, value: f64) -> Self {
        Self {
            extent,
            n_layers,
            data: vec![value; extent.n_columns() * n_layers],
        }
    }

    /// Zero field.
    pub fn zeros(extent: HorizontalExtent, n_layers: usize) -> Self {
        Self::filled(extent, n_layers, 0.0)
    }

    /// Zero field shaped like `grid`.
    pub fn zeros_like<G: ColumnGrid + ?Sized>(grid: &G) -> Self {
        Self::zeros(grid.extent(), grid.n_layers())
    }

    /// Field with cell (i, j, k) set to `f(i, j, k)`.
    pub fn from_fn<F>(extent: HorizontalExtent, n_layers: usize, f: F) -> Self
    where
        F: Fn(usize, usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(extent.n_columns() * n_layers);
        for c in extent.columns() {
            let (i, j) = extent.column_ij(c);
            data.extend((0..n_layers).map(|k| f(i, j, k)));
        }
        Self {
            extent,
            n_layers,
            data,
        }
    }

    /// Field sampled on the cell centers of `grid`: `f(z(i,j,k))`.
    pub fn from_depth_profile<G, F>(grid: &G, f: F) -> Self
    where
        G: ColumnGrid + ?Sized,
        F: Fn(f64) -> f64,
    {
        Self::from_fn(grid.extent(), grid.n_layers(), |i, j, k| {
            f(grid.z_center(i, j, k))
        })
    }

    /// Horizontal extent.
    #[inline]
    pub fn extent(&self) -> HorizontalExtent {
        self.extent
    }

    /// Layers per column.
    #[inline]
    pub fn n_layers(&self) -> usize {
        self.n_layers
    }

    /// (nx, ny, nz).
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.extent.nx(), self.extent.ny(), self.n_layers)
    }

    /// Whether this field has the same shape as `grid`.
    pub fn matches_grid<G: ColumnGrid + ?Sized>(&self, grid: &G) -> bool {
        self.extent == grid.extent() && self.n_layers == grid.n_layers()
    }

    #[inline]
    fn offset(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(k < self.n_layers, "layer {} out of {}", k, self.n_layers);
        self.extent.column_index(i, j).get() * self.n_layers + k
    }

    /// Value at (i, j, k).
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> f64 {
        self.data[self.offset(i, j, k)]
    }

    /// Set value at (i, j, k).
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: f64) {
        let idx = self.offset(i, j, k);
        self.data[idx] = value;
    }

    /// Values of one column, bottom to surface.
    #[inline]
    pub fn column(&self, column: ColumnIndex) -> &[f64] {
        let start = column.get() * self.n_layers;
        &self.data[start..start + self.n_layers]
    }

    /// Mutable values of one column, bottom to surface.
    #[inline]
    pub fn column_mut(&mut self, column: ColumnIndex) -> &mut [f64] {
        let start = column.get() * self.n_layers;
        &mut self.data[start..start + self.n_layers]
    }

    /// Values of column (i, j).
    #[inline]
    pub fn column_at(&self, i: usize, j: usize) -> &[f64] {
        self.column(self.extent.column_index(i, j))
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

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::RectilinearGrid;
    use crate::vertical::VerticalGrid;

    #[test]
    fn test_from_fn_layout() {
        let extent = HorizontalExtent::new(3, 2);
        let field = Field3D::from_fn(extent, 4, |i, j, k| (100 * i + 10 * j + k) as f64);

        assert_eq!(field.shape(), (3, 2, 4));
        assert_eq!(field.get(2, 1, 3), 213.0);
        // Column (1, 1) is flat column 4
        assert_eq!(field.column(ColumnIndex::new(4)), &[110.0, 111.0, 112.0, 113.0]);
        assert_eq!(field.as_slice().len(), 24);
    }

    #[test]
    fn test_column_mut_writes_through() {
        let mut field = Field3D::zeros(HorizontalExtent::new(2, 1), 2);
        field.column_mut(ColumnIndex::new(1))[0] = 7.0;
        assert_eq!(field.get(1, 0, 0), 7.0);
        assert_eq!(field.get(0, 0, 0), 0.0);
    }

    #[test]
    fn test_depth_profile_matches_grid() {
        let vertical = VerticalGrid::from_thicknesses(&[10.0, 10.0]).unwrap();
        let grid = RectilinearGrid::new(HorizontalExtent::new(2, 2), vertical);
        let field = Field3D::from_depth_profile(&grid, |z| -z);

        assert!(field.matches_grid(&grid));
        assert_eq!(field.column_at(1, 1), &[15.0, 5.0]);
    }

    #[test]
    fn test_fill() {
        let mut field = Field3D::filled(HorizontalExtent::single_column(), 3, 1.0);
        field.fill(f64::NAN);
        assert!(field.as_slice().iter().all(|v| v.is_nan()));
    }
}
