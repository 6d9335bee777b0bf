//! Horizontal grid extent.

use std::fmt;

use super::ColumnIndex;

/// Number of water columns in each horizontal direction.
///
/// Columns are numbered x-fastest: `column = j * nx + i`. A 1-wide
/// ("flat in x") topology is an extent with `nx == 1`, built with
/// [`HorizontalExtent::flat`].
///
/// # Example
///
/// ```
/// use bgc_rs::types::HorizontalExtent;
///
/// let extent = HorizontalExtent::new(4, 3);
/// assert_eq!(extent.n_columns(), 12);
///
/// let c = extent.column_index(1, 2);
/// assert_eq!(c.get(), 9);
/// assert_eq!(extent.column_ij(c), (1, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HorizontalExtent {
    /// Number of columns in x-direction
    nx: usize,
    /// Number of columns in y-direction
    ny: usize,
}

impl HorizontalExtent {
    /// Create a new extent.
    ///
    /// # Panics
    ///
    /// Panics if either `nx` or `ny` is zero.
    pub fn new(nx: usize, ny: usize) -> Self {
        assert!(nx > 0, "nx must be positive, got {}", nx);
        assert!(ny > 0, "ny must be positive, got {}", ny);
        Self { nx, ny }
    }

    /// Extent of a topology that is flat in x: a single row of `ny` columns.
    pub fn flat(ny: usize) -> Self {
        Self::new(1, ny)
    }

    /// A single water column.
    pub fn single_column() -> Self {
        Self::new(1, 1)
    }

    /// Number of columns in x-direction.
    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of columns in y-direction.
    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Whether this extent is flat in x.
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.nx == 1
    }

    /// Total number of columns.
    ///
    /// Overflows for extents whose column count exceeds `usize`; use
    /// [`checked_cells`](Self::checked_cells) on unvalidated extents.
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.nx * self.ny
    }

    /// Number of cells with `column_len` layers per column, or `None` if
    /// it does not fit in `usize`.
    #[inline]
    pub fn checked_cells(&self, column_len: usize) -> Option<usize> {
        self.nx.checked_mul(self.ny)?.checked_mul(column_len)
    }

    /// Whether (i, j) lies inside the extent.
    #[inline]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        i < self.nx && j < self.ny
    }

    /// Flat column index of (i, j).
    ///
    /// # Panics
    ///
    /// Debug-panics if (i, j) is outside the extent.
    #[inline]
    pub fn column_index(&self, i: usize, j: usize) -> ColumnIndex {
        debug_assert!(
            self.contains(i, j),
            "column ({}, {}) outside extent {}",
            i,
            j,
            self
        );
        ColumnIndex::new(j * self.nx + i)
    }

    /// (i, j) of a flat column index.
    #[inline]
    pub fn column_ij(&self, column: ColumnIndex) -> (usize, usize) {
        let c = column.get();
        (c % self.nx, c / self.nx)
    }

    /// Iterate over all column indices in storage order.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = ColumnIndex> {
        ColumnIndex::iter(self.n_columns())
    }
}

impl fmt::Display for HorizontalExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.nx, self.ny)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_roundtrip() {
        let extent = HorizontalExtent::new(5, 7);
        for j in 0..extent.ny() {
            for i in 0..extent.nx() {
                let c = extent.column_index(i, j);
                assert_eq!(extent.column_ij(c), (i, j));
            }
        }
    }

    #[test]
    fn test_flat_topology() {
        let extent = HorizontalExtent::flat(8);
        assert!(extent.is_flat());
        assert_eq!(extent.n_columns(), 8);
        assert_eq!(extent.column_ij(ColumnIndex::new(5)), (0, 5));
    }

    #[test]
    fn test_contains() {
        let extent = HorizontalExtent::new(2, 3);
        assert!(extent.contains(1, 2));
        assert!(!extent.contains(2, 0));
        assert!(!extent.contains(0, 3));
    }

    #[test]
    #[should_panic(expected = "nx must be positive")]
    fn test_zero_extent_panics() {
        let _ = HorizontalExtent::new(0, 4);
    }

    #[test]
    fn test_checked_cells() {
        let extent = HorizontalExtent::new(4, 3);
        assert_eq!(extent.checked_cells(5), Some(60));
        assert_eq!(extent.checked_cells(0), Some(0));
        assert_eq!(HorizontalExtent::new(usize::MAX / 2, 3).checked_cells(1), None);
        assert_eq!(HorizontalExtent::new(usize::MAX / 4, 2).checked_cells(4), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(HorizontalExtent::new(3, 2).to_string(), "3×2");
    }
}
