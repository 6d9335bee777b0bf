//! Single-threaded launcher.

use super::{check_extent, ColumnLauncher, LaunchError};
use crate::types::{ColumnIndex, HorizontalExtent};

/// Runs columns one after another in storage order.
///
/// Useful for debugging and as the reference result for the parallel
/// backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct SerialLauncher;

impl ColumnLauncher for SerialLauncher {
    fn launch<F>(
        &self,
        extent: HorizontalExtent,
        column_len: usize,
        data: &mut [f64],
        kernel: F,
    ) -> Result<(), LaunchError>
    where
        F: Fn(ColumnIndex, &mut [f64]) + Send + Sync,
    {
        check_extent(extent, column_len, data.len())?;
        if column_len == 0 {
            return Ok(());
        }

        log::debug!(
            "serial launch: {} columns x {} layers",
            extent.n_columns(),
            column_len
        );

        for (c, column) in data.chunks_mut(column_len).enumerate() {
            kernel(ColumnIndex::new(c), column);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "serial"
    }
}
