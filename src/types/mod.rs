//! Strongly-typed domain types.
//!
//! Newtypes keep depths, z-coordinates and the two kinds of indices apart:
//!
//! - [`Depth`] is positive downward, [`PhysicalZ`] is negative downward
//! - [`ColumnIndex`] addresses a water column, [`LevelIndex`] a layer in it
//! - [`HorizontalExtent`] maps (i, j) to column indices
//!
//! # Example
//!
//! ```
//! use bgc_rs::types::{Depth, HorizontalExtent, PhysicalZ};
//!
//! let extent = HorizontalExtent::new(10, 4);
//! assert_eq!(extent.n_columns(), 40);
//!
//! let h = Depth::new(30.0);
//! assert!(PhysicalZ::new(-12.0).is_above(h));
//! ```

mod extent;
mod indices;
mod physical;

pub use extent::HorizontalExtent;
pub use indices::{ColumnIndex, LevelIndex};
pub use physical::{Depth, PhysicalZ};
