//! Rectilinear grid with z-level vertical coordinates.

use std::borrow::Cow;

use super::{ColumnGeometry, ColumnGrid};
use crate::types::{ColumnIndex, HorizontalExtent};
use crate::vertical::VerticalGrid;

/// Horizontally uniform grid: every column shares one [`VerticalGrid`].
///
/// # Example
///
/// ```
/// use bgc_rs::grid::{ColumnGrid, RectilinearGrid};
/// use bgc_rs::types::HorizontalExtent;
/// use bgc_rs::vertical::VerticalGrid;
///
/// let vertical = VerticalGrid::from_thicknesses(&[10.0, 10.0, 10.0])?;
/// let grid = RectilinearGrid::new(HorizontalExtent::new(4, 2), vertical);
///
/// assert_eq!(grid.n_layers(), 3);
/// assert_eq!(grid.z_center(3, 1, 2), -5.0);
/// assert_eq!(grid.dz(0, 0, 0), 10.0);
/// # Ok::<(), bgc_rs::grid::GridError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RectilinearGrid {
    extent: HorizontalExtent,
    vertical: VerticalGrid,
}

impl RectilinearGrid {
    /// Create a grid from a horizontal extent and a shared vertical grid.
    pub fn new(extent: HorizontalExtent, vertical: VerticalGrid) -> Self {
        Self { extent, vertical }
    }

    /// A single column, useful for 1D setups.
    pub fn single_column(vertical: VerticalGrid) -> Self {
        Self::new(HorizontalExtent::single_column(), vertical)
    }

    /// The shared vertical grid.
    #[inline]
    pub fn vertical(&self) -> &VerticalGrid {
        &self.vertical
    }
}

impl ColumnGrid for RectilinearGrid {
    #[inline]
    fn extent(&self) -> HorizontalExtent {
        self.extent
    }

    #[inline]
    fn n_layers(&self) -> usize {
        self.vertical.n_layers()
    }

    #[inline]
    fn dz(&self, _i: usize, _j: usize, k: usize) -> f64 {
        self.vertical.thicknesses()[k]
    }

    #[inline]
    fn z_center(&self, _i: usize, _j: usize, k: usize) -> f64 {
        self.vertical.centers()[k]
    }

    fn column_geometry(&self, _column: ColumnIndex) -> ColumnGeometry<'_> {
        ColumnGeometry {
            z: Cow::Borrowed(self.vertical.centers()),
            dz: Cow::Borrowed(self.vertical.thicknesses()),
        }
    }
}
