//! Rayon thread-pool launcher.

use rayon::prelude::*;

use super::{check_extent, ColumnLauncher, LaunchError};
use crate::types::{ColumnIndex, HorizontalExtent};

/// Runs columns concurrently on the global rayon pool.
///
/// The output buffer is split with `par_chunks_mut`, one chunk per column,
/// so every kernel owns its slice exclusively. `for_each` returns only after
/// all chunks are done.
///
/// # Example
///
/// ```
/// use bgc_rs::launch::{ColumnLauncher, ParallelLauncher};
/// use bgc_rs::types::HorizontalExtent;
///
/// let extent = HorizontalExtent::new(64, 64);
/// let mut data = vec![0.0; extent.n_columns() * 10];
///
/// ParallelLauncher::default()
///     .with_min_columns(32)
///     .launch(extent, 10, &mut data, |_, column| column.fill(1.0))
///     .unwrap();
///
/// assert!(data.iter().all(|&v| v == 1.0));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ParallelLauncher {
    /// Minimum number of columns per rayon task.
    min_columns: usize,
}

impl Default for ParallelLauncher {
    fn default() -> Self {
        Self { min_columns: 1 }
    }
}

impl ParallelLauncher {
    /// Create a launcher splitting work down to single columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not split work into tasks smaller than `min_columns` columns.
    ///
    /// Short columns are cheap; batching them reduces scheduling overhead.
    pub fn with_min_columns(mut self, min_columns: usize) -> Self {
        self.min_columns = min_columns.max(1);
        self
    }

    /// Minimum columns per task.
    #[inline]
    pub fn min_columns(&self) -> usize {
        self.min_columns
    }
}

impl ColumnLauncher for ParallelLauncher {
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
            "parallel launch: {} columns x {} layers on {} threads",
            extent.n_columns(),
            column_len,
            rayon::current_num_threads()
        );

        data.par_chunks_mut(column_len)
            .with_min_len(self.min_columns)
            .enumerate()
            .for_each(|(c, column)| kernel(ColumnIndex::new(c), column));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "parallel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::SerialLauncher;

    #[test]
    fn test_matches_serial() {
        let extent = HorizontalExtent::new(17, 9);
        let n = 6;
        let kernel = |column: ColumnIndex, values: &mut [f64]| {
            let mut acc = column.get() as f64;
            for v in values.iter_mut().rev() {
                acc = acc * 0.5 + 1.0;
                *v = acc;
            }
        };

        let mut serial = vec![0.0; extent.n_columns() * n];
        let mut parallel = vec![0.0; extent.n_columns() * n];
        SerialLauncher.launch(extent, n, &mut serial, kernel).unwrap();
        ParallelLauncher::new()
            .launch(extent, n, &mut parallel, kernel)
            .unwrap();

        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_extent_mismatch() {
        let extent = HorizontalExtent::new(4, 4);
        let mut data = vec![0.0; 10];
        let result = ParallelLauncher::new().launch(extent, 1, &mut data, |_, _| {});
        assert!(result.is_err());
    }

    #[test]
    fn test_min_columns_clamped() {
        assert_eq!(ParallelLauncher::new().with_min_columns(0).min_columns(), 1);
    }

    #[test]
    #[should_panic(expected = "column fault")]
    fn test_kernel_panic_propagates() {
        let extent = HorizontalExtent::new(8, 1);
        let mut data = vec![0.0; 8];
        let _ = ParallelLauncher::new().launch(extent, 1, &mut data, |column, _| {
            if column.get() == 5 {
                panic!("column fault");
            }
        });
    }
}
