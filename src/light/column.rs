//! Per-column light/growth recurrence.
//!
//! For one water column the kernel runs, in fixed order:
//!
//! 1. **Attenuation**, surface to bottom. `chlinteg` accumulates
//!    `P · chl2c · Δz` including the current layer, and the local light is
//!    `L(z) / exp(chlinteg · Kc)`. When growth is averaged, g is applied here.
//! 2. **Mixed-layer sums**, surface to bottom: Σ value·Δz and Σ Δz over the
//!    layers whose center satisfies `z > -h`.
//! 3. **Broadcast**: every layer passing the same test gets the mean.
//! 4. **Deferred growth**: when light is averaged, g is applied to every
//!    layer.
//!
//! Each pass reads the complete output of the previous one, so the passes
//! cannot be fused or reordered. The center test is strict and excludes a
//! layer straddling `-h` entirely, however much of it lies in the mixed
//! layer.
//!
//! Degenerate sums are not guarded: with no qualifying layer the 0/0 mean
//! is computed but never stored; with only zero-thickness qualifying layers
//! the NaN is stored in those layers.

use super::config::OpticalConfig;
use super::profile::LightProfile;
use super::response::LightResponse;
use crate::types::{Depth, LevelIndex, PhysicalZ};

// =============================================================================
// Averaging order
// =============================================================================

/// Which quantity is homogenized over the mixed layer.
///
/// g is nonlinear, so averaging and applying g do not commute:
///
/// - [`AverageGrowth`](Self::AverageGrowth): apply g per layer, then average
///   the growth rate. Biology mixes faster than it adapts to light.
/// - [`AverageLight`](Self::AverageLight): average the light, then apply g.
///   Physical mixing homogenizes the light the cells experience.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AveragingOrder {
    /// Growth applied before averaging (`average_growth = true`).
    AverageGrowth,
    /// Growth applied after averaging (`average_growth = false`).
    #[default]
    AverageLight,
}

impl AveragingOrder {
    /// Map the `average_growth` flag to an ordering.
    #[inline]
    pub fn from_average_growth(average_growth: bool) -> Self {
        if average_growth {
            Self::AverageGrowth
        } else {
            Self::AverageLight
        }
    }

    /// The `average_growth` flag of this ordering.
    #[inline]
    pub fn averages_growth(self) -> bool {
        matches!(self, Self::AverageGrowth)
    }

    /// Short name for logging.
    pub fn name(self) -> &'static str {
        match self {
            Self::AverageGrowth => "average_growth",
            Self::AverageLight => "average_light",
        }
    }
}

/// Compile-time ordering strategy.
///
/// The kernel is monomorphized per strategy, so passes 1 and 4 never test
/// the mode flag inside the layer loop.
pub trait OrderingStrategy {
    /// The ordering this strategy implements.
    const ORDER: AveragingOrder;

    /// Value stored by pass 1 for a layer with attenuated light `local_light`.
    fn store_attenuated<R: LightResponse + ?Sized>(local_light: f64, response: &R) -> f64;

    /// Pass 4, run after the mixed-layer broadcast.
    fn finish<R: LightResponse + ?Sized>(column: &mut [f64], response: &R);
}

/// Apply g, then average (`average_growth = true`).
#[derive(Clone, Copy, Debug, Default)]
pub struct ApplyThenAverage;

impl OrderingStrategy for ApplyThenAverage {
    const ORDER: AveragingOrder = AveragingOrder::AverageGrowth;

    #[inline]
    fn store_attenuated<R: LightResponse + ?Sized>(local_light: f64, response: &R) -> f64 {
        response.growth(local_light)
    }

    #[inline]
    fn finish<R: LightResponse + ?Sized>(_column: &mut [f64], _response: &R) {}
}

/// Average, then apply g (`average_growth = false`).
#[derive(Clone, Copy, Debug, Default)]
pub struct AverageThenApply;

impl OrderingStrategy for AverageThenApply {
    const ORDER: AveragingOrder = AveragingOrder::AverageLight;

    #[inline]
    fn store_attenuated<R: LightResponse + ?Sized>(local_light: f64, _response: &R) -> f64 {
        local_light
    }

    #[inline]
    fn finish<R: LightResponse + ?Sized>(column: &mut [f64], response: &R) {
        for k in LevelIndex::surface_down(column.len()) {
            column[k] = response.growth(column[k]);
        }
    }
}

// =============================================================================
// Column inputs
// =============================================================================

/// Read-only inputs of one column, bottom to surface.
#[derive(Clone, Copy, Debug)]
pub struct ColumnInput<'a> {
    /// Biomass P per layer.
    pub biomass: &'a [f64],
    /// Cell-center z per layer.
    pub z: &'a [f64],
    /// Cell thickness Δz per layer.
    pub dz: &'a [f64],
    /// Mixed-layer depth h of the column.
    pub mixed_layer_depth: Depth,
}

impl ColumnInput<'_> {
    /// Number of layers.
    #[inline]
    pub fn n_layers(&self) -> usize {
        self.z.len()
    }

    /// Whether layer `k` belongs to the mixed layer: `z[k] > -h`.
    #[inline]
    pub fn in_mixed_layer(&self, k: LevelIndex) -> bool {
        in_mixed_layer(self.z[k], self.mixed_layer_depth)
    }
}

/// Mixed-layer membership of a layer centered at `z`: strictly `z > -h`.
#[inline]
pub fn in_mixed_layer(z: f64, h: Depth) -> bool {
    PhysicalZ::new(z).is_above(h)
}

/// Thickness-weighted sums over the mixed layer (pass 2).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MixedLayerSums {
    /// Σ value · Δz.
    pub weighted: f64,
    /// Σ Δz.
    pub thickness: f64,
}

impl MixedLayerSums {
    /// Thickness-weighted mean. Not finite when `thickness` is zero.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.weighted / self.thickness
    }
}

// =============================================================================
// Passes
// =============================================================================

/// Pass 1: attenuated light (or its growth rate) per layer.
fn attenuate<S, L, R>(
    out: &mut [f64],
    input: &ColumnInput<'_>,
    profile: &L,
    response: &R,
    optics: &OpticalConfig,
) where
    S: OrderingStrategy,
    L: LightProfile + ?Sized,
    R: LightResponse + ?Sized,
{
    let mut chlinteg = 0.0;
    for k in LevelIndex::surface_down(out.len()) {
        chlinteg += optics.chlorophyll_path(input.biomass[k], input.dz[k]);
        let local_light = optics.attenuate(profile.irradiance(input.z[k]), chlinteg);
        out[k] = S::store_attenuated(local_light, response);
    }
}

/// Pass 2: sums over mixed-layer cells.
pub fn mixed_layer_sums(values: &[f64], input: &ColumnInput<'_>) -> MixedLayerSums {
    let mut sums = MixedLayerSums::default();
    for k in LevelIndex::surface_down(values.len()) {
        if input.in_mixed_layer(k) {
            sums.weighted += values[k] * input.dz[k];
            sums.thickness += input.dz[k];
        }
    }
    sums
}

/// Pass 3: overwrite mixed-layer cells with `mean`.
fn broadcast(values: &mut [f64], input: &ColumnInput<'_>, mean: f64) {
    for k in LevelIndex::surface_down(values.len()) {
        if input.in_mixed_layer(k) {
            values[k] = mean;
        }
    }
}

/// Run the full recurrence for one column with a compile-time ordering.
///
/// Every element of `out` is overwritten.
pub fn light_column<S, L, R>(
    out: &mut [f64],
    input: &ColumnInput<'_>,
    profile: &L,
    response: &R,
    optics: &OpticalConfig,
) where
    S: OrderingStrategy,
    L: LightProfile + ?Sized,
    R: LightResponse + ?Sized,
{
    debug_assert_eq!(out.len(), input.n_layers());
    debug_assert_eq!(input.biomass.len(), input.n_layers());
    debug_assert_eq!(input.dz.len(), input.n_layers());

    attenuate::<S, L, R>(out, input, profile, response, optics);
    let sums = mixed_layer_sums(out, input);
    broadcast(out, input, sums.mean());
    S::finish(out, response);
}

/// Run the recurrence for one column with a runtime ordering.
///
/// # Example
///
/// ```
/// use bgc_rs::light::{
///     light_column_with, AveragingOrder, ColumnInput, ConstantLight, MichaelisMenten,
///     OpticalConfig,
/// };
/// use bgc_rs::types::Depth;
///
/// let input = ColumnInput {
///     biomass: &[0.0, 0.0, 0.0],
///     z: &[-25.0, -15.0, -5.0],
///     dz: &[10.0, 10.0, 10.0],
///     mixed_layer_depth: Depth::new(15.0),
/// };
/// let mut out = [0.0; 3];
/// light_column_with(
///     AveragingOrder::AverageLight,
///     &mut out,
///     &input,
///     &ConstantLight(100.0),
///     &MichaelisMenten::new(1.0),
///     &OpticalConfig::default(),
/// );
/// assert_eq!(out, [100.0 / 101.0; 3]);
/// ```
pub fn light_column_with<L, R>(
    order: AveragingOrder,
    out: &mut [f64],
    input: &ColumnInput<'_>,
    profile: &L,
    response: &R,
    optics: &OpticalConfig,
) where
    L: LightProfile + ?Sized,
    R: LightResponse + ?Sized,
{
    match order {
        AveragingOrder::AverageGrowth => {
            light_column::<ApplyThenAverage, L, R>(out, input, profile, response, optics)
        }
        AveragingOrder::AverageLight => {
            light_column::<AverageThenApply, L, R>(out, input, profile, response, optics)
        }
    }
}

/// Integrated chlorophyll `chlinteg` at every layer, bottom to surface.
///
/// The same accumulation pass 1 performs, exposed for diagnostics.
pub fn optical_depth_into(
    out: &mut [f64],
    biomass: &[f64],
    dz: &[f64],
    optics: &OpticalConfig,
) {
    debug_assert_eq!(out.len(), biomass.len());
    debug_assert_eq!(out.len(), dz.len());

    let mut chlinteg = 0.0;
    for k in LevelIndex::surface_down(out.len()) {
        chlinteg += optics.chlorophyll_path(biomass[k], dz[k]);
        out[k] = chlinteg;
    }
}
