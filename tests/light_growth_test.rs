//! End-to-end tests of the mixed-layer light/growth computation.
//!
//! Reference values are rebuilt with the same arithmetic as the kernel, so
//! most comparisons are bit-exact.

use bgc_rs::launch::SerialLauncher;
use bgc_rs::light::optical_depth_into;
use bgc_rs::types::HorizontalExtent;
use bgc_rs::{
    compute_light_growth, summarize_light, AveragingOrder, ColumnField, ColumnGrid,
    ConstantLight, ExponentialLight, Field3D, LightError, LightGrowth, LightProfile,
    LightResponse, MichaelisMenten, OpticalConfig, RectilinearGrid, SurfaceRefinedSpacing,
    TerrainFollowingGrid, UniformSpacing, VerticalGrid,
};

fn ten_meter_layers(n: usize) -> VerticalGrid {
    VerticalGrid::from_thicknesses(&vec![10.0; n]).unwrap()
}

/// Pass-1 light of one column without any mixing.
fn attenuated_column<L: LightProfile>(
    profile: &L,
    biomass: &[f64],
    z: &[f64],
    dz: &[f64],
    optics: &OpticalConfig,
) -> Vec<f64> {
    let mut out = vec![0.0; z.len()];
    let mut chlinteg = 0.0;
    for k in (0..z.len()).rev() {
        chlinteg += biomass[k] * optics.chl2c * dz[k];
        out[k] = profile.irradiance(z[k]) / (chlinteg * optics.kc).exp();
    }
    out
}

/// Biomass varying in all three directions.
fn patchy_biomass<G: ColumnGrid>(grid: &G) -> Field3D {
    Field3D::from_fn(grid.extent(), grid.n_layers(), |i, j, k| {
        0.2 + 0.1 * ((i * 7 + j * 3 + k) % 5) as f64
    })
}

#[test]
fn test_single_column_reference_scenario() {
    // Nz = 3, Δz = 10, P = 0, L = 100, h = 15, g(x) = x / (1 + x)
    let grid = RectilinearGrid::single_column(ten_meter_layers(3));
    let biomass = Field3D::zeros_like(&grid);
    let mld = ColumnField::filled(grid.extent(), 15.0);
    let mut light = Field3D::filled(grid.extent(), 3, -1.0);

    let g = |x: f64| x / (1.0 + x);
    compute_light_growth(&mut light, &mld, &biomass, &grid, &ConstantLight(100.0), &g, false)
        .unwrap();

    assert_eq!(light.as_slice(), &[100.0 / 101.0; 3]);
}

#[test]
fn test_zero_mixed_layer_equals_pointwise_growth() {
    let grid = RectilinearGrid::new(HorizontalExtent::new(3, 2), ten_meter_layers(6));
    let biomass = patchy_biomass(&grid);
    let mld = ColumnField::zeros(grid.extent());
    let profile = ExponentialLight::new(150.0, 25.0);
    let response = MichaelisMenten::new(20.0);
    let optics = OpticalConfig::default();

    for average_growth in [false, true] {
        let mut light = Field3D::zeros_like(&grid);
        compute_light_growth(
            &mut light,
            &mld,
            &biomass,
            &grid,
            &profile,
            &response,
            average_growth,
        )
        .unwrap();

        for c in grid.extent().columns() {
            let geometry = grid.column_geometry(c);
            let expected =
                attenuated_column(&profile, biomass.column(c), &geometry.z, &geometry.dz, &optics);
            for (k, &value) in light.column(c).iter().enumerate() {
                assert_eq!(
                    value,
                    response.growth(expected[k]),
                    "column {}, layer {}, average_growth={}",
                    c,
                    k,
                    average_growth
                );
            }
        }
    }
}

#[test]
fn test_mixed_layer_uniform_and_deep_layers_untouched() {
    let grid = RectilinearGrid::single_column(ten_meter_layers(5));
    let biomass = patchy_biomass(&grid);
    let profile = ExponentialLight::new(300.0, 15.0);
    let identity = |x: f64| x;
    let optics = OpticalConfig::default();

    // Centers: -45, -35, -25, -15, -5. With h = 25 only the top two mix.
    let mld = ColumnField::filled(grid.extent(), 25.0);
    let mut light = Field3D::zeros_like(&grid);
    compute_light_growth(&mut light, &mld, &biomass, &grid, &profile, &identity, false).unwrap();

    let vertical = grid.vertical();
    let pass1 = attenuated_column(
        &profile,
        biomass.column_at(0, 0),
        vertical.centers(),
        vertical.thicknesses(),
        &optics,
    );
    let mean = (pass1[4] * 10.0 + pass1[3] * 10.0) / 20.0;
    let column = light.column_at(0, 0);

    assert_eq!(column[4], mean);
    assert_eq!(column[3], mean);
    assert_eq!(&column[..3], &pass1[..3]);
}

#[test]
fn test_no_qualifying_layer_introduces_no_nan() {
    let grid = RectilinearGrid::new(HorizontalExtent::new(2, 2), ten_meter_layers(4));
    let biomass = patchy_biomass(&grid);
    // Shallower than the top center at -5
    let mld = ColumnField::filled(grid.extent(), 4.0);
    let mut light = Field3D::zeros_like(&grid);

    compute_light_growth(
        &mut light,
        &mld,
        &biomass,
        &grid,
        &ConstantLight(80.0),
        &MichaelisMenten::new(10.0),
        true,
    )
    .unwrap();

    assert!(summarize_light(&light).is_clean());
}

#[test]
fn test_layer_centered_on_mixed_layer_base_is_excluded() {
    let grid = RectilinearGrid::single_column(ten_meter_layers(3));
    let biomass = Field3D::zeros_like(&grid);
    // -15 > -15 is false: only the top layer qualifies
    let mld = ColumnField::filled(grid.extent(), 15.0);
    let profile = |z: f64| 100.0 + z;
    let identity = |x: f64| x;
    let mut light = Field3D::zeros_like(&grid);

    LightGrowth::new(&profile, &identity)
        .with_optics(OpticalConfig::transparent())
        .compute_with(&SerialLauncher, &grid, &biomass, &mld, &mut light)
        .unwrap();

    assert_eq!(light.as_slice(), &[75.0, 85.0, 95.0]);
}

#[test]
fn test_zero_thickness_mixed_layer_writes_nan() {
    let vertical = VerticalGrid::from_faces(vec![-20.0, -10.0, 0.0, 0.0]).unwrap();
    let grid = RectilinearGrid::single_column(vertical);
    let biomass = Field3D::filled(grid.extent(), 3, 1.0);
    // Only the zero-thickness top layer (center 0) lies above -5
    let mld = ColumnField::filled(grid.extent(), 5.0);
    let mut light = Field3D::zeros_like(&grid);

    compute_light_growth(
        &mut light,
        &mld,
        &biomass,
        &grid,
        &ConstantLight(100.0),
        &MichaelisMenten::new(1.0),
        false,
    )
    .unwrap();

    let column = light.column_at(0, 0);
    assert!(column[2].is_nan());
    assert!(column[1].is_finite());
    assert!(column[0].is_finite());

    let summary = summarize_light(&light);
    assert_eq!(summary.non_finite, 1);
    assert_eq!(summary.first_non_finite, Some((0, 0, 2)));
}

#[test]
fn test_idempotent() {
    let grid = RectilinearGrid::new(
        HorizontalExtent::new(6, 5),
        VerticalGrid::new(bgc_rs::types::Depth::new(120.0), 12, SurfaceRefinedSpacing::default())
            .unwrap(),
    );
    let biomass = patchy_biomass(&grid);
    let mld = ColumnField::from_fn(grid.extent(), |i, j| 5.0 + 8.0 * (i + j) as f64);
    let profile = ExponentialLight::new(250.0, 30.0);
    let response = MichaelisMenten::new(25.0);

    let mut first = Field3D::zeros_like(&grid);
    let mut second = Field3D::filled(grid.extent(), grid.n_layers(), 42.0);
    for light in [&mut first, &mut second] {
        compute_light_growth(light, &mld, &biomass, &grid, &profile, &response, true).unwrap();
    }

    assert_eq!(first, second);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_matches_serial() {
    use bgc_rs::ParallelLauncher;

    let grid = TerrainFollowingGrid::from_fn(
        HorizontalExtent::new(17, 9),
        20,
        SurfaceRefinedSpacing::new(4.0),
        |i, j| 30.0 + 10.0 * i as f64 + 3.0 * j as f64,
    )
    .unwrap();
    let biomass = patchy_biomass(&grid);
    let mld = ColumnField::from_fn(grid.extent(), |i, j| 2.0 * (i * j) as f64);
    let profile = ExponentialLight::new(200.0, 20.0);
    let response = MichaelisMenten::new(15.0);

    for order in [AveragingOrder::AverageGrowth, AveragingOrder::AverageLight] {
        let growth = LightGrowth::new(&profile, &response).with_ordering(order);

        let mut serial = Field3D::zeros_like(&grid);
        growth
            .compute_with(&SerialLauncher, &grid, &biomass, &mld, &mut serial)
            .unwrap();

        let mut parallel = Field3D::zeros_like(&grid);
        growth
            .compute_with(
                &ParallelLauncher::new().with_min_columns(4),
                &grid,
                &biomass,
                &mld,
                &mut parallel,
            )
            .unwrap();

        assert_eq!(serial, parallel, "{:?}", order);
    }
}

#[test]
fn test_more_biomass_never_brightens_below() {
    let grid = RectilinearGrid::single_column(ten_meter_layers(8));
    let mld = ColumnField::zeros(grid.extent());
    let profile = ExponentialLight::new(100.0, 40.0);
    let identity = |x: f64| x;

    let base = patchy_biomass(&grid);
    let k0 = 5;
    let mut denser = base.clone();
    denser.set(0, 0, k0, base.get(0, 0, k0) + 3.0);

    let mut light_base = Field3D::zeros_like(&grid);
    let mut light_denser = Field3D::zeros_like(&grid);
    compute_light_growth(&mut light_base, &mld, &base, &grid, &profile, &identity, false).unwrap();
    compute_light_growth(&mut light_denser, &mld, &denser, &grid, &profile, &identity, false)
        .unwrap();

    for k in 0..=k0 {
        assert!(
            light_denser.get(0, 0, k) < light_base.get(0, 0, k),
            "layer {} should be darker",
            k
        );
    }
    for k in k0 + 1..8 {
        assert_eq!(light_denser.get(0, 0, k), light_base.get(0, 0, k));
    }

    // Integrated chlorophyll grows at k0 and every layer below it
    let optics = OpticalConfig::default();
    let dz = grid.vertical().thicknesses();
    let mut chl_base = vec![0.0; 8];
    let mut chl_denser = vec![0.0; 8];
    optical_depth_into(&mut chl_base, base.column_at(0, 0), dz, &optics);
    optical_depth_into(&mut chl_denser, denser.column_at(0, 0), dz, &optics);
    for k in 0..=k0 {
        assert!(
            chl_denser[k] > chl_base[k],
            "chlinteg at layer {} should increase",
            k
        );
    }
    assert_eq!(&chl_denser[k0 + 1..], &chl_base[k0 + 1..]);
}

#[test]
fn test_orderings_differ_for_concave_response() {
    let grid = RectilinearGrid::single_column(ten_meter_layers(4));
    let biomass = Field3D::filled(grid.extent(), 4, 1.0);
    let mld = ColumnField::filled(grid.extent(), 40.0);
    let profile = ExponentialLight::new(400.0, 10.0);
    let sqrt = |x: f64| x.sqrt();

    let mut growth_first = Field3D::zeros_like(&grid);
    let mut light_first = Field3D::zeros_like(&grid);
    compute_light_growth(&mut growth_first, &mld, &biomass, &grid, &profile, &sqrt, true).unwrap();
    compute_light_growth(&mut light_first, &mld, &biomass, &grid, &profile, &sqrt, false).unwrap();

    // Jensen: mean of sqrt is below sqrt of mean
    for k in 0..4 {
        assert!(growth_first.get(0, 0, k) < light_first.get(0, 0, k));
    }
    // Each result is uniform over the fully mixed column
    let top = light_first.get(0, 0, 3);
    assert!(light_first.as_slice().iter().all(|&v| v == top));
}

#[test]
fn test_terrain_following_columns() {
    let extent = HorizontalExtent::new(2, 1);
    let grid =
        TerrainFollowingGrid::new(extent, 5, UniformSpacing, vec![10.0, 200.0]).unwrap();
    let biomass = Field3D::filled(extent, 5, 2.0);
    let mld = ColumnField::filled(extent, 50.0);
    let mut light = Field3D::zeros_like(&grid);

    compute_light_growth(
        &mut light,
        &mld,
        &biomass,
        &grid,
        &ExponentialLight::new(100.0, 20.0),
        &MichaelisMenten::new(5.0),
        false,
    )
    .unwrap();

    // Shallow column lies entirely within the mixed layer
    let shallow = light.column_at(0, 0);
    assert!(shallow.iter().all(|&v| v == shallow[0]));

    // Deep column: centers at -180..-20; only -20 is above -50
    let deep = light.column_at(1, 0);
    assert!(deep[0] < deep[4]);
    assert!(deep[4] < shallow[4]);
}

#[test]
fn test_flat_topology() {
    let extent = HorizontalExtent::flat(6);
    let grid = RectilinearGrid::new(extent, ten_meter_layers(4));
    let biomass = Field3D::filled(extent, 4, 0.7);
    let mld = ColumnField::filled(extent, 22.0);
    let mut light = Field3D::zeros_like(&grid);

    compute_light_growth(
        &mut light,
        &mld,
        &biomass,
        &grid,
        &ConstantLight(60.0),
        &MichaelisMenten::new(12.0),
        false,
    )
    .unwrap();

    let first = light.column_at(0, 0).to_vec();
    for j in 1..6 {
        assert_eq!(light.column_at(0, j), first.as_slice());
    }
}

#[test]
fn test_shape_mismatch_leaves_output_untouched() {
    let grid = RectilinearGrid::new(HorizontalExtent::new(3, 3), ten_meter_layers(4));
    let biomass = Field3D::zeros_like(&grid);
    let mld = ColumnField::zeros(grid.extent());
    let mut light = Field3D::filled(HorizontalExtent::new(3, 2), 4, 9.0);
    let before = light.clone();

    let result = compute_light_growth(
        &mut light,
        &mld,
        &biomass,
        &grid,
        &ConstantLight(1.0),
        &MichaelisMenten::new(1.0),
        false,
    );

    assert_eq!(
        result,
        Err(LightError::ShapeMismatch {
            field: "light",
            expected: (3, 3, 4),
            actual: (3, 2, 4),
        })
    );
    assert_eq!(light, before);
}
