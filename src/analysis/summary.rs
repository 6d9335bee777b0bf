//! Sanity diagnostics for computed light/growth fields.
//!
//! The light kernel never validates its own output: a zero-thickness mixed
//! layer yields 0/0, and extreme optical depths can overflow `exp`. These
//! helpers let the caller detect and clamp such cells after the fact.
//!
//! # Example
//!
//! ```
//! use bgc_rs::analysis::{replace_non_finite, summarize_light};
//! use bgc_rs::field::Field3D;
//! use bgc_rs::types::HorizontalExtent;
//!
//! let mut light = Field3D::filled(HorizontalExtent::new(2, 1), 2, 0.25);
//! light.set(1, 0, 1, f64::NAN);
//!
//! let summary = summarize_light(&light);
//! assert_eq!(summary.non_finite, 1);
//! assert_eq!(summary.first_non_finite, Some((1, 0, 1)));
//!
//! assert_eq!(replace_non_finite(&mut light, 0.0), 1);
//! assert!(summarize_light(&light).is_clean());
//! ```

use std::fmt;

use crate::field::Field3D;
use crate::types::ColumnIndex;

/// Range statistics of a light or growth field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightFieldSummary {
    /// Smallest finite value (`+inf` when there is none).
    pub min: f64,
    /// Largest finite value (`-inf` when there is none).
    pub max: f64,
    /// Mean over finite cells (NaN when there is none).
    pub mean: f64,
    /// Number of finite cells.
    pub finite: usize,
    /// Number of NaN or infinite cells.
    pub non_finite: usize,
    /// (i, j, k) of the first non-finite cell in storage order.
    pub first_non_finite: Option<(usize, usize, usize)>,
}

impl LightFieldSummary {
    /// Whether every cell is finite.
    pub fn is_clean(&self) -> bool {
        self.non_finite == 0
    }

    /// Whether every finite value lies in `[lo, hi]`.
    pub fn within(&self, lo: f64, hi: f64) -> bool {
        self.finite == 0 || (self.min >= lo && self.max <= hi)
    }
}

impl fmt::Display for LightFieldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "range [{:.4e}, {:.4e}], mean {:.4e} over {} cells",
            self.min, self.max, self.mean, self.finite
        )?;
        if let Some((i, j, k)) = self.first_non_finite {
            write!(
                f,
                ", {} non-finite (first at i={}, j={}, k={})",
                self.non_finite, i, j, k
            )?;
        }
        Ok(())
    }
}

/// Collect range statistics of `field`.
///
/// Logs a warning when any cell is non-finite.
pub fn summarize_light(field: &Field3D) -> LightFieldSummary {
    let n_layers = field.n_layers();
    let extent = field.extent();

    let mut summary = LightFieldSummary {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
        mean: f64::NAN,
        finite: 0,
        non_finite: 0,
        first_non_finite: None,
    };
    let mut sum = 0.0;

    for (offset, &value) in field.as_slice().iter().enumerate() {
        if value.is_finite() {
            summary.min = summary.min.min(value);
            summary.max = summary.max.max(value);
            sum += value;
            summary.finite += 1;
        } else {
            if summary.first_non_finite.is_none() && n_layers > 0 {
                let column = ColumnIndex::new(offset / n_layers);
                let (i, j) = extent.column_ij(column);
                summary.first_non_finite = Some((i, j, offset % n_layers));
            }
            summary.non_finite += 1;
        }
    }

    if summary.finite > 0 {
        summary.mean = sum / summary.finite as f64;
    }
    if let Some((i, j, k)) = summary.first_non_finite {
        log::warn!(
            "{} non-finite light values, first at ({}, {}, {})",
            summary.non_finite,
            i,
            j,
            k
        );
    }

    summary
}

/// Overwrite every non-finite cell of `field` with `value`.
///
/// Returns the number of cells replaced.
pub fn replace_non_finite(field: &mut Field3D, value: f64) -> usize {
    let mut replaced = 0;
    for cell in field.as_mut_slice().iter_mut().filter(|v| !v.is_finite()) {
        *cell = value;
        replaced += 1;
    }
    if replaced > 0 {
        log::warn!("replaced {} non-finite light values with {}", replaced, value);
    }
    replaced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HorizontalExtent;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_summary_of_clean_field() {
        let field = Field3D::from_fn(HorizontalExtent::new(2, 2), 3, |i, j, k| {
            (i + 2 * j + 4 * k) as f64
        });
        let summary = summarize_light(&field);

        assert!(summary.is_clean());
        assert_eq!(summary.min, 0.0);
        assert_eq!(summary.max, 11.0);
        assert_eq!(summary.finite, 12);
        assert!((summary.mean - 5.5).abs() < TOL);
        assert!(summary.within(0.0, 11.0));
        assert!(!summary.within(0.0, 10.0));
    }

    #[test]
    fn test_first_non_finite_location() {
        let mut field = Field3D::zeros(HorizontalExtent::new(3, 2), 4);
        field.set(2, 1, 3, f64::INFINITY);
        field.set(0, 1, 2, f64::NAN);

        let summary = summarize_light(&field);
        assert_eq!(summary.non_finite, 2);
        // Column (0, 1) precedes column (2, 1) in storage
        assert_eq!(summary.first_non_finite, Some((0, 1, 2)));
        assert_eq!(summary.finite, 22);
        assert!(summary.to_string().contains("2 non-finite"));
    }

    #[test]
    fn test_all_non_finite() {
        let field = Field3D::filled(HorizontalExtent::new(1, 1), 2, f64::NAN);
        let summary = summarize_light(&field);
        assert_eq!(summary.finite, 0);
        assert!(summary.mean.is_nan());
        assert!(summary.within(0.0, 1.0));
    }

    #[test]
    fn test_replace_non_finite() {
        let mut field = Field3D::filled(HorizontalExtent::new(2, 1), 2, 0.5);
        field.set(0, 0, 0, f64::NAN);
        field.set(1, 0, 1, f64::NEG_INFINITY);

        assert_eq!(replace_non_finite(&mut field, 0.0), 2);
        assert_eq!(field.as_slice(), &[0.0, 0.5, 0.5, 0.0]);
        assert_eq!(replace_non_finite(&mut field, 0.0), 0);
    }
}
