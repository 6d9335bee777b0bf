//! Terrain-following grid with per-column water depth.
//!
//! A unit vertical grid s ∈ [-1, 0] is scaled by the local depth H(i, j):
//!
//! ```text
//! z(i,j,k)  = H(i,j) × s_center[k]
//! Δz(i,j,k) = H(i,j) × Δs[k]
//! ```
//!
//! This is the sigma transform with a flat free surface (η = 0).

use super::{ColumnGrid, GridError};
use crate::types::{Depth, HorizontalExtent};
use crate::vertical::{LayerSpacing, VerticalGrid};

/// Sigma-style grid over variable bathymetry.
///
/// # Example
///
/// ```
/// use bgc_rs::grid::{ColumnGrid, TerrainFollowingGrid};
/// use bgc_rs::types::HorizontalExtent;
/// use bgc_rs::vertical::UniformSpacing;
///
/// // Shelf deepening offshore
/// let extent = HorizontalExtent::new(3, 1);
/// let grid = TerrainFollowingGrid::from_fn(extent, 4, UniformSpacing, |i, _| {
///     20.0 + 40.0 * i as f64
/// })?;
///
/// assert_eq!(grid.dz(0, 0, 0), 5.0);
/// assert_eq!(grid.dz(2, 0, 0), 25.0);
/// # Ok::<(), bgc_rs::grid::GridError>(())
/// ```
#[derive(Clone, Debug)]
pub struct TerrainFollowingGrid {
    extent: HorizontalExtent,
    /// Vertical grid over unit depth.
    unit: VerticalGrid,
    /// Water depth per column, storage order of the extent.
    depths: Vec<f64>,
}

impl TerrainFollowingGrid {
    /// Create a grid from per-column depths (column storage order).
    pub fn new(
        extent: HorizontalExtent,
        n_layers: usize,
        spacing: impl LayerSpacing,
        depths: Vec<f64>,
    ) -> Result<Self, GridError> {
        if depths.len() != extent.n_columns() {
            return Err(GridError::ColumnCountMismatch {
                extent,
                expected: extent.n_columns(),
                actual: depths.len(),
            });
        }
        if let Some(&depth) = depths.iter().find(|h| !(h.is_finite() && **h > 0.0)) {
            return Err(GridError::InvalidDepth { depth });
        }

        let unit = VerticalGrid::new(Depth::new(1.0), n_layers, spacing)?;
        Ok(Self {
            extent,
            unit,
            depths,
        })
    }

    /// Create a grid with depth given by `depth_fn(i, j)`.
    pub fn from_fn<F>(
        extent: HorizontalExtent,
        n_layers: usize,
        spacing: impl LayerSpacing,
        depth_fn: F,
    ) -> Result<Self, GridError>
    where
        F: Fn(usize, usize) -> f64,
    {
        let depths = extent
            .columns()
            .map(|c| {
                let (i, j) = extent.column_ij(c);
                depth_fn(i, j)
            })
            .collect();
        Self::new(extent, n_layers, spacing, depths)
    }

    /// Water depth of column (i, j).
    #[inline]
    pub fn depth(&self, i: usize, j: usize) -> Depth {
        Depth::new_unchecked(self.depths[self.extent.column_index(i, j)])
    }

    /// The unit-depth vertical grid.
    #[inline]
    pub fn unit_vertical(&self) -> &VerticalGrid {
        &self.unit
    }
}

impl ColumnGrid for TerrainFollowingGrid {
    #[inline]
    fn extent(&self) -> HorizontalExtent {
        self.extent
    }

    #[inline]
    fn n_layers(&self) -> usize {
        self.unit.n_layers()
    }

    #[inline]
    fn dz(&self, i: usize, j: usize, k: usize) -> f64 {
        self.depth(i, j).meters() * self.unit.thicknesses()[k]
    }

    #[inline]
    fn z_center(&self, i: usize, j: usize, k: usize) -> f64 {
        self.depth(i, j).meters() * self.unit.centers()[k]
    }
}
