//! Light-limited growth over a basin with sloping bathymetry.
//!
//! Sets up a terrain-following grid whose depth increases offshore, a
//! mixed layer that deepens toward the open sea and patchy biomass, then:
//! - Runs the computation on the default backend
//! - Summarizes the result and clamps any non-finite cells
//! - Prints a depth-averaged growth transect

use bgc_rs::types::HorizontalExtent;
use bgc_rs::{
    compute_light_growth, replace_non_finite, summarize_light, ColumnField, ColumnGrid,
    ExponentialLight, Field3D, JassbyPlatt, TerrainFollowingGrid, UniformSpacing,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parameters
    let nx = 40;
    let ny = 20;
    let n_layers = 30;
    let shelf_depth = 20.0;
    let slope = 8.0; // m per column offshore

    let extent = HorizontalExtent::new(nx, ny);
    let grid = TerrainFollowingGrid::from_fn(extent, n_layers, UniformSpacing, |i, _| {
        shelf_depth + slope * i as f64
    })?;

    println!("Stratified Basin");
    println!("================");
    println!("Columns: {} ({} cells)", extent, grid.n_cells());
    println!(
        "Depth: {:.0} - {:.0} m",
        grid.depth(0, 0).meters(),
        grid.depth(nx - 1, 0).meters()
    );
    println!();

    // Bloom near the coast, decaying offshore and with depth
    let biomass = Field3D::from_fn(extent, n_layers, |i, j, k| {
        let coastal = (-(i as f64) / 10.0).exp();
        let patch = 1.0 + 0.3 * ((j as f64) * 0.7).sin();
        let surface = (k + 1) as f64 / n_layers as f64;
        2.0 * coastal * patch * surface
    });
    let mld = ColumnField::from_fn(extent, |i, _| 10.0 + 1.5 * i as f64);
    let mut growth = Field3D::zeros_like(&grid);

    compute_light_growth(
        &mut growth,
        &mld,
        &biomass,
        &grid,
        &ExponentialLight::new(180.0, 20.0),
        &JassbyPlatt::new(40.0),
        false,
    )?;

    let summary = summarize_light(&growth);
    println!("Growth multiplier: {}", summary);
    let replaced = replace_non_finite(&mut growth, 0.0);
    if replaced > 0 {
        println!("Clamped {} non-finite cells", replaced);
    }
    println!();

    // Thickness-weighted depth average along the central row
    let j = ny / 2;
    println!("{:>6} {:>10} {:>12}", "i", "H (m)", "mean g");
    for i in (0..nx).step_by(4) {
        let mut weighted = 0.0;
        for k in 0..n_layers {
            weighted += growth.get(i, j, k) * grid.dz(i, j, k);
        }
        let depth = grid.depth(i, j).meters();
        println!("{:>6} {:>10.1} {:>12.5}", i, depth, weighted / depth);
    }

    Ok(())
}
