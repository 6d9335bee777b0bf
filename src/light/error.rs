//! Errors raised before the light kernel touches its output.

use thiserror::Error;

use crate::launch::LaunchError;

/// Failure of a light/growth computation.
///
/// Every variant is raised before any column runs, so the output field is
/// left exactly as the caller passed it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LightError {
    /// An input or output field does not have the grid's shape.
    #[error("{field} has shape {actual:?}, grid expects {expected:?}")]
    ShapeMismatch {
        /// Which argument was wrong.
        field: &'static str,
        /// (nx, ny, nz) of the grid.
        expected: (usize, usize, usize),
        /// (nx, ny, nz) of the field.
        actual: (usize, usize, usize),
    },

    /// The launcher rejected the output buffer.
    #[error("launch failed: {0}")]
    Launch(#[from] LaunchError),
}
