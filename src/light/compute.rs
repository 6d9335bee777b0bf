//! Field-level light/growth computation.

use super::column::{
    light_column, ApplyThenAverage, AverageThenApply, AveragingOrder, ColumnInput,
    OrderingStrategy,
};
use super::config::OpticalConfig;
use super::error::LightError;
use super::profile::LightProfile;
use super::response::LightResponse;
use crate::field::{ColumnField, Field3D};
use crate::grid::ColumnGrid;
use crate::launch::{Backend, ColumnLauncher};
use crate::types::{ColumnIndex, Depth};

/// Light-limited growth over a whole grid.
///
/// Holds the forcing (`profile`, `response`) and the model constants;
/// [`compute_with`](Self::compute_with) runs the per-column recurrence on
/// every column through a [`ColumnLauncher`].
///
/// # Example
///
/// ```
/// use bgc_rs::field::{ColumnField, Field3D};
/// use bgc_rs::grid::{ColumnGrid, RectilinearGrid};
/// use bgc_rs::light::{AveragingOrder, ConstantLight, LightGrowth, MichaelisMenten};
/// use bgc_rs::launch::SerialLauncher;
/// use bgc_rs::types::HorizontalExtent;
/// use bgc_rs::vertical::VerticalGrid;
///
/// let vertical = VerticalGrid::from_thicknesses(&[10.0, 10.0, 10.0])?;
/// let grid = RectilinearGrid::new(HorizontalExtent::new(4, 2), vertical);
///
/// let biomass = Field3D::zeros_like(&grid);
/// let mld = ColumnField::filled(grid.extent(), 15.0);
/// let mut light = Field3D::zeros_like(&grid);
///
/// LightGrowth::new(&ConstantLight(100.0), &MichaelisMenten::new(1.0))
///     .with_ordering(AveragingOrder::AverageLight)
///     .compute_with(&SerialLauncher, &grid, &biomass, &mld, &mut light)?;
///
/// assert!(light.as_slice().iter().all(|&v| v == 100.0 / 101.0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct LightGrowth<'a, L: ?Sized, R: ?Sized> {
    profile: &'a L,
    response: &'a R,
    optics: OpticalConfig,
    order: AveragingOrder,
}

impl<'a, L, R> LightGrowth<'a, L, R>
where
    L: LightProfile + ?Sized,
    R: LightResponse + ?Sized,
{
    /// Default optics, light averaged before g is applied.
    pub fn new(profile: &'a L, response: &'a R) -> Self {
        Self {
            profile,
            response,
            optics: OpticalConfig::default(),
            order: AveragingOrder::default(),
        }
    }

    /// Set the optical constants.
    pub fn with_optics(mut self, optics: OpticalConfig) -> Self {
        self.optics = optics;
        self
    }

    /// Set the averaging order.
    pub fn with_ordering(mut self, order: AveragingOrder) -> Self {
        self.order = order;
        self
    }

    /// Set the averaging order from the `average_growth` flag.
    pub fn average_growth(self, average_growth: bool) -> Self {
        self.with_ordering(AveragingOrder::from_average_growth(average_growth))
    }

    /// Optical constants in use.
    pub fn optics(&self) -> &OpticalConfig {
        &self.optics
    }

    /// Averaging order in use.
    pub fn ordering(&self) -> AveragingOrder {
        self.order
    }

    /// Run on the default backend.
    pub fn compute<G>(
        &self,
        grid: &G,
        biomass: &Field3D,
        mixed_layer_depth: &ColumnField,
        light: &mut Field3D,
    ) -> Result<(), LightError>
    where
        G: ColumnGrid + ?Sized,
    {
        self.compute_with(&Backend::default(), grid, biomass, mixed_layer_depth, light)
    }

    /// Run on `launcher`, overwriting every cell of `light`.
    ///
    /// Shapes are checked before any column runs; on error `light` is
    /// untouched.
    pub fn compute_with<B, G>(
        &self,
        launcher: &B,
        grid: &G,
        biomass: &Field3D,
        mixed_layer_depth: &ColumnField,
        light: &mut Field3D,
    ) -> Result<(), LightError>
    where
        B: ColumnLauncher + ?Sized,
        G: ColumnGrid + ?Sized,
    {
        check_shapes(grid, biomass, mixed_layer_depth, light)?;

        log::debug!(
            "light growth: {} grid with {} layers, {}, backend {}",
            grid.extent(),
            grid.n_layers(),
            self.order.name(),
            launcher.name()
        );

        match self.order {
            AveragingOrder::AverageGrowth => {
                self.run::<ApplyThenAverage, B, G>(launcher, grid, biomass, mixed_layer_depth, light)
            }
            AveragingOrder::AverageLight => {
                self.run::<AverageThenApply, B, G>(launcher, grid, biomass, mixed_layer_depth, light)
            }
        }
    }

    fn run<S, B, G>(
        &self,
        launcher: &B,
        grid: &G,
        biomass: &Field3D,
        mixed_layer_depth: &ColumnField,
        light: &mut Field3D,
    ) -> Result<(), LightError>
    where
        S: OrderingStrategy,
        B: ColumnLauncher + ?Sized,
        G: ColumnGrid + ?Sized,
    {
        let extent = grid.extent();
        let n_layers = grid.n_layers();

        launcher.launch(extent, n_layers, light.as_mut_slice(), |column: ColumnIndex, out| {
            let geometry = grid.column_geometry(column);
            let input = ColumnInput {
                biomass: biomass.column(column),
                z: &geometry.z,
                dz: &geometry.dz,
                mixed_layer_depth: Depth::new_unchecked(mixed_layer_depth.at(column)),
            };
            light_column::<S, L, R>(out, &input, self.profile, self.response, &self.optics);
        })?;

        Ok(())
    }
}

fn check_shapes<G: ColumnGrid + ?Sized>(
    grid: &G,
    biomass: &Field3D,
    mixed_layer_depth: &ColumnField,
    light: &Field3D,
) -> Result<(), LightError> {
    let extent = grid.extent();
    let expected = (extent.nx(), extent.ny(), grid.n_layers());

    if !biomass.matches_grid(grid) {
        return Err(LightError::ShapeMismatch {
            field: "biomass",
            expected,
            actual: biomass.shape(),
        });
    }
    if !light.matches_grid(grid) {
        return Err(LightError::ShapeMismatch {
            field: "light",
            expected,
            actual: light.shape(),
        });
    }
    if mixed_layer_depth.extent() != extent {
        let other = mixed_layer_depth.extent();
        return Err(LightError::ShapeMismatch {
            field: "mixed_layer_depth",
            expected: (extent.nx(), extent.ny(), 1),
            actual: (other.nx(), other.ny(), 1),
        });
    }
    Ok(())
}

/// Compute light-limited growth for every cell of `grid`.
///
/// With `average_growth` the growth rate g(light) is averaged over the
/// mixed layer, otherwise the light is averaged and g applied afterwards.
/// Uses the default optical constants and backend; see [`LightGrowth`]
/// for control over either.
pub fn compute_light_growth<G, L, R>(
    light: &mut Field3D,
    mixed_layer_depth: &ColumnField,
    biomass: &Field3D,
    grid: &G,
    profile: &L,
    response: &R,
    average_growth: bool,
) -> Result<(), LightError>
where
    G: ColumnGrid + ?Sized,
    L: LightProfile + ?Sized,
    R: LightResponse + ?Sized,
{
    LightGrowth::new(profile, response)
        .average_growth(average_growth)
        .compute(grid, biomass, mixed_layer_depth, light)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::RectilinearGrid;
    use crate::launch::SerialLauncher;
    use crate::light::{ConstantLight, MichaelisMenten};
    use crate::types::HorizontalExtent;
    use crate::vertical::VerticalGrid;

    fn three_layer_grid(nx: usize, ny: usize) -> RectilinearGrid {
        let vertical = VerticalGrid::from_thicknesses(&[10.0, 10.0, 10.0]).unwrap();
        RectilinearGrid::new(HorizontalExtent::new(nx, ny), vertical)
    }

    #[test]
    fn test_builder_defaults() {
        let profile = ConstantLight(1.0);
        let response = MichaelisMenten::new(1.0);
        let growth = LightGrowth::new(&profile, &response);
        assert_eq!(growth.ordering(), AveragingOrder::AverageLight);
        assert_eq!(*growth.optics(), OpticalConfig::default());

        let growth = growth.average_growth(true);
        assert_eq!(growth.ordering(), AveragingOrder::AverageGrowth);
    }

    #[test]
    fn test_biomass_shape_mismatch_leaves_output() {
        let grid = three_layer_grid(2, 2);
        let biomass = Field3D::zeros(HorizontalExtent::new(2, 2), 4);
        let mld = ColumnField::zeros(grid.extent());
        let mut light = Field3D::filled(grid.extent(), 3, -7.0);

        let result = LightGrowth::new(&ConstantLight(1.0), &MichaelisMenten::new(1.0))
            .compute_with(&SerialLauncher, &grid, &biomass, &mld, &mut light);

        assert_eq!(
            result,
            Err(LightError::ShapeMismatch {
                field: "biomass",
                expected: (2, 2, 3),
                actual: (2, 2, 4),
            })
        );
        assert!(light.as_slice().iter().all(|&v| v == -7.0));
    }

    #[test]
    fn test_mixed_layer_extent_mismatch() {
        let grid = three_layer_grid(3, 2);
        let biomass = Field3D::zeros_like(&grid);
        let mld = ColumnField::zeros(HorizontalExtent::new(2, 3));
        let mut light = Field3D::zeros_like(&grid);

        let err = compute_light_growth(
            &mut light,
            &mld,
            &biomass,
            &grid,
            &ConstantLight(1.0),
            &MichaelisMenten::new(1.0),
            false,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LightError::ShapeMismatch {
                field: "mixed_layer_depth",
                ..
            }
        ));
    }

    #[test]
    fn test_per_column_mixed_layer_depth() {
        let grid = three_layer_grid(2, 1);
        let biomass = Field3D::zeros_like(&grid);
        // Column 0 fully mixed, column 1 not mixed at all
        let mld = ColumnField::from_fn(grid.extent(), |i, _| if i == 0 { 100.0 } else { 0.0 });
        let mut light = Field3D::zeros_like(&grid);
        let profile = |z: f64| 100.0 + z;
        let identity = |x: f64| x;

        LightGrowth::new(&profile, &identity)
            .with_optics(OpticalConfig::transparent())
            .compute_with(&SerialLauncher, &grid, &biomass, &mld, &mut light)
            .unwrap();

        assert_eq!(light.column_at(0, 0), &[85.0, 85.0, 85.0]);
        assert_eq!(light.column_at(1, 0), &[75.0, 85.0, 95.0]);
    }
}
