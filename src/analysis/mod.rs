//! Post-processing diagnostics for computed fields.
//!
//! - [`summarize_light`]: range statistics and the first non-finite cell
//! - [`replace_non_finite`]: clamp NaN/Inf cells to a fill value

mod summary;

pub use summary::{replace_non_finite, summarize_light, LightFieldSummary};
