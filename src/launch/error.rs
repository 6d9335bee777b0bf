//! Error types for kernel launch.

use thiserror::Error;

use crate::types::HorizontalExtent;

/// Faults reported by a [`ColumnLauncher`](super::ColumnLauncher).
///
/// Raised before any column runs; the output buffer is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    /// Buffer length does not match extent × column length.
    #[error(
        "Buffer of {actual} values does not cover extent {extent} with {column_len} layers (expected {})",
        describe_count(.expected)
    )]
    ExtentMismatch {
        /// Horizontal extent of the launch.
        extent: HorizontalExtent,
        /// Values per column.
        column_len: usize,
        /// Required buffer length; `None` when it overflows `usize`.
        expected: Option<usize>,
        /// Length of the buffer passed in.
        actual: usize,
    },
}

fn describe_count(count: &Option<usize>) -> String {
    match count {
        Some(n) => n.to_string(),
        None => "more than usize::MAX".to_string(),
    }
}
