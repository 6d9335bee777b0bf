//! Scalar field storage addressable by grid index.
//!
//! - [`Field3D`]: one value per cell, e.g. biomass `P` and the `light` output
//! - [`ColumnField`]: one value per column, e.g. mixed-layer depth `h`
//!
//! # Memory Layout
//!
//! `Field3D` keeps each column contiguous (`offset = column * n_layers + k`),
//! so a launcher can split the data into disjoint `&mut [f64]` column slices
//! with `chunks_mut` and hand them to independent workers.

mod column;
mod field3d;

pub use column::ColumnField;
pub use field3d::Field3D;
