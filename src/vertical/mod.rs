//! Vertical layer geometry for a water column.
//!
//! The light recurrence needs two numbers per layer: the center coordinate
//! z (negative, increasing toward the surface) and the thickness Δz ≥ 0.
//! [`VerticalGrid`] stores both, bottom to surface, as contiguous slices so
//! a column kernel can borrow them without copying.
//!
//! # Spacing
//!
//! - [`UniformSpacing`]: equal thickness
//! - [`SurfaceRefinedSpacing`]: thin layers near the surface, where the
//!   mixed layer and the steepest light gradient live
//!
//! # Example
//!
//! ```
//! use bgc_rs::types::Depth;
//! use bgc_rs::vertical::{SurfaceRefinedSpacing, VerticalGrid};
//!
//! let grid = VerticalGrid::new(Depth::new(200.0), 40, SurfaceRefinedSpacing::new(5.0))?;
//! assert_eq!(grid.n_layers(), 40);
//! assert!(grid.thicknesses()[39] < grid.thicknesses()[0]);
//! # Ok::<(), bgc_rs::grid::GridError>(())
//! ```

mod grid;
mod spacing;

pub use grid::VerticalGrid;
pub use spacing::{LayerSpacing, SurfaceRefinedSpacing, UniformSpacing};
