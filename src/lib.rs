//! # bgc-rs
//!
//! Mixed-layer light attenuation and light-limited phytoplankton growth
//! for ocean biogeochemistry models.
//!
//! This crate provides:
//! - Vertical layer geometry (uniform and surface-refined spacing)
//! - Structured z-level and terrain-following column grids
//! - Column-contiguous cell and column fields
//! - Serial and thread-pool column launchers
//! - Beer–Lambert self-shading with mixed-layer averaging of light or growth
//! - Diagnostics for non-finite output
//!
//! # Example
//!
//! ```
//! use bgc_rs::{
//!     compute_light_growth, ColumnField, ConstantLight, Field3D, MichaelisMenten,
//!     RectilinearGrid, VerticalGrid,
//! };
//! use bgc_rs::types::HorizontalExtent;
//!
//! // Three 10 m layers, no biomass, mixed layer 15 m deep
//! let grid = RectilinearGrid::new(
//!     HorizontalExtent::single_column(),
//!     VerticalGrid::from_thicknesses(&[10.0, 10.0, 10.0])?,
//! );
//! let biomass = Field3D::zeros_like(&grid);
//! let mld = ColumnField::filled(HorizontalExtent::single_column(), 15.0);
//! let mut light = Field3D::zeros_like(&grid);
//!
//! compute_light_growth(
//!     &mut light,
//!     &mld,
//!     &biomass,
//!     &grid,
//!     &ConstantLight(100.0),
//!     &MichaelisMenten::new(1.0),
//!     false,
//! )?;
//!
//! assert_eq!(light.as_slice(), &[100.0 / 101.0; 3]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analysis;
pub mod field;
pub mod grid;
pub mod launch;
pub mod light;
pub mod types;
pub mod vertical;

// Re-export main types for convenience
pub use analysis::{replace_non_finite, summarize_light, LightFieldSummary};
pub use field::{ColumnField, Field3D};
pub use grid::{ColumnGeometry, ColumnGrid, GridError, RectilinearGrid, TerrainFollowingGrid};
#[cfg(feature = "parallel")]
pub use launch::ParallelLauncher;
pub use launch::{Backend, ColumnLauncher, LaunchError, SerialLauncher};
pub use light::{
    compute_light_growth, AveragingOrder, Blackman, ConstantLight, ExponentialLight,
    JassbyPlatt, LightError, LightGrowth, LightProfile, LightResponse, MichaelisMenten,
    OpticalConfig,
};
pub use vertical::{LayerSpacing, SurfaceRefinedSpacing, UniformSpacing, VerticalGrid};
