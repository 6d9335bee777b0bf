//! Columnar kernel launch.
//!
//! A launcher runs a kernel once per water column and returns only after
//! every column has finished. It knows nothing about what the kernel does:
//! it hands each invocation the column index and that column's disjoint
//! `&mut [f64]` slice of the output buffer, so no two kernels can ever
//! write the same cell.
//!
//! # Backends
//!
//! - [`SerialLauncher`]: plain loop, deterministic order
//! - [`ParallelLauncher`]: rayon thread pool (feature `parallel`)
//! - [`Backend`]: runtime choice between the two
//!
//! # Faults
//!
//! The buffer length is checked against the extent before any kernel runs,
//! so a shape fault leaves the output untouched. A panic inside a kernel is
//! re-raised on the calling thread after the barrier.
//!
//! # Example
//!
//! ```
//! use bgc_rs::launch::{ColumnLauncher, SerialLauncher};
//! use bgc_rs::types::HorizontalExtent;
//!
//! let extent = HorizontalExtent::new(2, 2);
//! let mut data = vec![0.0; extent.n_columns() * 3];
//!
//! SerialLauncher
//!     .launch(extent, 3, &mut data, |column, values| {
//!         values.fill(column.get() as f64);
//!     })
//!     .unwrap();
//!
//! assert_eq!(&data[9..], &[3.0, 3.0, 3.0]);
//! ```

mod error;
#[cfg(feature = "parallel")]
mod parallel;
mod serial;

use crate::types::{ColumnIndex, HorizontalExtent};

pub use error::LaunchError;
#[cfg(feature = "parallel")]
pub use parallel::ParallelLauncher;
pub use serial::SerialLauncher;

/// Dispatches one unit of work per column and blocks until all complete.
pub trait ColumnLauncher {
    /// Run `kernel` on every column of `extent`.
    ///
    /// `data` must hold exactly `extent.n_columns() * column_len` values,
    /// column-contiguous. Each call of `kernel` receives the column index
    /// and that column's slice. There is no ordering between columns.
    fn launch<F>(
        &self,
        extent: HorizontalExtent,
        column_len: usize,
        data: &mut [f64],
        kernel: F,
    ) -> Result<(), LaunchError>
    where
        F: Fn(ColumnIndex, &mut [f64]) + Send + Sync;

    /// Backend name for logging.
    fn name(&self) -> &'static str;
}

/// Validate the buffer against the extent before dispatch.
pub(crate) fn check_extent(
    extent: HorizontalExtent,
    column_len: usize,
    data_len: usize,
) -> Result<(), LaunchError> {
    let expected = extent.checked_cells(column_len);
    if expected != Some(data_len) {
        return Err(LaunchError::ExtentMismatch {
            extent,
            column_len,
            expected,
            actual: data_len,
        });
    }
    Ok(())
}

// =============================================================================
// Runtime backend selection
// =============================================================================

/// Launcher chosen at runtime.
///
/// `Backend::default()` is parallel when the `parallel` feature is enabled.
#[derive(Clone, Copy, Debug)]
pub enum Backend {
    /// Single-threaded loop.
    Serial,
    /// Rayon thread pool.
    #[cfg(feature = "parallel")]
    Parallel(ParallelLauncher),
}

impl Default for Backend {
    fn default() -> Self {
        #[cfg(feature = "parallel")]
        return Backend::Parallel(ParallelLauncher::default());
        #[cfg(not(feature = "parallel"))]
        return Backend::Serial;
    }
}

impl ColumnLauncher for Backend {
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
        match self {
            Backend::Serial => SerialLauncher.launch(extent, column_len, data, kernel),
            #[cfg(feature = "parallel")]
            Backend::Parallel(launcher) => launcher.launch(extent, column_len, data, kernel),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Backend::Serial => SerialLauncher.name(),
            #[cfg(feature = "parallel")]
            Backend::Parallel(launcher) => launcher.name(),
        }
    }
}
