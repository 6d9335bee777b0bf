//! Light attenuation and light-limited phytoplankton growth.
//!
//! For each water column the light reaching a layer is the surface profile
//! L(z) dimmed by the chlorophyll above it, including the layer itself:
//!
//! ```text
//! chlinteg(k) = Σ_{k' ≥ k} P(k') · chl2c · Δz(k')
//! light(k)    = L(z(k)) / exp(chlinteg(k) · Kc)
//! ```
//!
//! Inside the mixed layer (cells with center `z > -h`) turbulence
//! homogenizes either the light or the growth rate g(light), depending on
//! [`AveragingOrder`]. The result written to the output field is always a
//! growth multiplier g.
//!
//! # Mixed-layer membership
//!
//! A cell belongs to the mixed layer when its *center* lies strictly above
//! `-h`. A cell straddling `-h` with its center below is excluded entirely,
//! and a cell centered exactly at `-h` is excluded too. Partial-cell
//! weighting is not applied, so the averaged layer is always a whole number
//! of cells.
//!
//! # Components
//!
//! - [`OpticalConfig`]: `chl2c` and `Kc`
//! - [`LightProfile`]: [`ConstantLight`], [`ExponentialLight`], closures
//! - [`LightResponse`]: [`MichaelisMenten`], [`JassbyPlatt`], [`Blackman`], closures
//! - [`light_column`]: the recurrence on one column's slices
//! - [`LightGrowth`] / [`compute_light_growth`]: the recurrence on a whole grid
//!
//! # Example
//!
//! ```
//! use bgc_rs::field::{ColumnField, Field3D};
//! use bgc_rs::grid::{ColumnGrid, RectilinearGrid};
//! use bgc_rs::light::{compute_light_growth, ExponentialLight, MichaelisMenten};
//! use bgc_rs::types::{Depth, HorizontalExtent};
//! use bgc_rs::vertical::VerticalGrid;
//!
//! let vertical = VerticalGrid::uniform(Depth::new(100.0), 20)?;
//! let grid = RectilinearGrid::new(HorizontalExtent::new(8, 8), vertical);
//!
//! let biomass = Field3D::filled(grid.extent(), grid.n_layers(), 0.5);
//! let mld = ColumnField::filled(grid.extent(), 30.0);
//! let mut growth = Field3D::zeros_like(&grid);
//!
//! compute_light_growth(
//!     &mut growth,
//!     &mld,
//!     &biomass,
//!     &grid,
//!     &ExponentialLight::new(200.0, 20.0),
//!     &MichaelisMenten::new(30.0),
//!     false,
//! )?;
//!
//! assert!(growth.as_slice().iter().all(|&g| (0.0..1.0).contains(&g)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod column;
mod compute;
mod config;
mod error;
mod profile;
mod response;

pub use column::{
    in_mixed_layer, light_column, light_column_with, mixed_layer_sums, optical_depth_into,
    ApplyThenAverage, AverageThenApply, AveragingOrder, ColumnInput, MixedLayerSums,
    OrderingStrategy,
};
pub use compute::{compute_light_growth, LightGrowth};
pub use config::{OpticalConfig, DEFAULT_CHL2C, DEFAULT_KC};
pub use error::LightError;
pub use profile::{ConstantLight, ExponentialLight, LightProfile};
pub use response::{Blackman, JassbyPlatt, LightResponse, MichaelisMenten};
