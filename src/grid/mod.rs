//! Structured 3D grids seen one water column at a time.
//!
//! The light kernel only needs per-cell geometry: the thickness Δz(i,j,k)
//! and the center coordinate z(i,j,k). [`ColumnGrid`] is that contract. Two
//! implementations are provided:
//!
//! - [`RectilinearGrid`]: z-levels, the same [`VerticalGrid`] under every
//!   column. Column geometry is borrowed, never copied.
//! - [`TerrainFollowingGrid`]: a unit vertical grid stretched over a
//!   per-column water depth, so Δz genuinely varies with (i, j).
//!
//! Layer index k runs from 0 (bottom) to `n_layers - 1` (surface).

mod error;
mod rectilinear;
mod terrain;

use std::borrow::Cow;

use crate::types::{ColumnIndex, HorizontalExtent};

pub use error::GridError;
pub use rectilinear::RectilinearGrid;
pub use terrain::TerrainFollowingGrid;

/// Vertical geometry of one column: centers and thicknesses, bottom to surface.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnGeometry<'a> {
    /// Cell-center z, length n_layers.
    pub z: Cow<'a, [f64]>,
    /// Cell thickness Δz, length n_layers.
    pub dz: Cow<'a, [f64]>,
}

impl ColumnGeometry<'_> {
    /// Number of layers in the column.
    #[inline]
    pub fn n_layers(&self) -> usize {
        self.z.len()
    }
}

/// A structured grid addressable by (i, j, k).
///
/// Implementations must be `Sync`: every column kernel reads the geometry
/// concurrently.
pub trait ColumnGrid: Sync {
    /// Horizontal extent.
    fn extent(&self) -> HorizontalExtent;

    /// Number of vertical layers in every column.
    fn n_layers(&self) -> usize;

    /// Thickness of cell (i, j, k), ≥ 0.
    fn dz(&self, i: usize, j: usize, k: usize) -> f64;

    /// Center z of cell (i, j, k), negative below the surface.
    fn z_center(&self, i: usize, j: usize, k: usize) -> f64;

    /// Geometry of a whole column.
    ///
    /// The default gathers the per-cell accessors into owned buffers;
    /// grids that already store contiguous columns should borrow instead.
    fn column_geometry(&self, column: ColumnIndex) -> ColumnGeometry<'_> {
        let (i, j) = self.extent().column_ij(column);
        let n = self.n_layers();
        ColumnGeometry {
            z: Cow::Owned((0..n).map(|k| self.z_center(i, j, k)).collect()),
            dz: Cow::Owned((0..n).map(|k| self.dz(i, j, k)).collect()),
        }
    }

    /// Total number of cells.
    fn n_cells(&self) -> usize {
        self.extent().n_columns() * self.n_layers()
    }
}
