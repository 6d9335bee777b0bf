//! Vertical layer spacing functions.
//!
//! A spacing function distributes layer faces over the unit interval
//! s ∈ [-1, 0] (bottom to surface). [`VerticalGrid`](super::VerticalGrid)
//! scales the result to a physical depth.
//!
//! # Example
//!
//! ```
//! use bgc_rs::vertical::{LayerSpacing, SurfaceRefinedSpacing, UniformSpacing};
//!
//! let uniform = UniformSpacing.face_fractions(4);
//! assert_eq!(uniform, vec![-1.0, -0.75, -0.5, -0.25, 0.0]);
//!
//! let refined = SurfaceRefinedSpacing::new(4.0).face_fractions(4);
//! // Top layer thinner than bottom layer
//! assert!(refined[4] - refined[3] < refined[1] - refined[0]);
//! ```

/// Trait for vertical layer spacing functions.
///
/// Implementations return `n_layers + 1` face positions with
/// `s[0] = -1` (bottom), `s[n_layers] = 0` (surface), non-decreasing.
pub trait LayerSpacing: Send + Sync {
    /// Face positions in s ∈ [-1, 0], length `n_layers + 1`.
    fn face_fractions(&self, n_layers: usize) -> Vec<f64>;

    /// Human-readable name for diagnostics.
    fn name(&self) -> &'static str;

    /// Description of parameters.
    fn description(&self) -> String {
        self.name().to_string()
    }
}

// =============================================================================
// Uniform
// =============================================================================

/// Equal layer thickness over the whole column.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformSpacing;

impl LayerSpacing for UniformSpacing {
    fn face_fractions(&self, n_layers: usize) -> Vec<f64> {
        let n = n_layers as f64;
        (0..=n_layers).map(|k| (k as f64 - n) / n).collect()
    }

    fn name(&self) -> &'static str {
        "uniform"
    }
}

// =============================================================================
// Surface refined
// =============================================================================

/// Layers clustered toward the surface.
///
/// Uses the surface term of the Song–Haidvogel stretching function:
///
/// ```text
/// C(s) = (1 - cosh(θ s)) / (cosh θ - 1)
/// ```
///
/// C(-1) = -1 and C(0) = 0 for any θ > 0, and dC/ds → 0 at the surface,
/// so the upper layers resolve the mixed layer finely. θ = 0 falls back to
/// uniform spacing.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceRefinedSpacing {
    /// Refinement strength (0 = uniform, 3-7 typical).
    pub theta_s: f64,
}

impl SurfaceRefinedSpacing {
    /// Create a spacing with refinement strength `theta_s`.
    pub fn new(theta_s: f64) -> Self {
        debug_assert!(theta_s >= 0.0, "theta_s must be non-negative, got {}", theta_s);
        Self { theta_s }
    }

    #[inline]
    fn stretch(&self, s: f64) -> f64 {
        if self.theta_s > 0.0 {
            (1.0 - (self.theta_s * s).cosh()) / (self.theta_s.cosh() - 1.0)
        } else {
            s
        }
    }
}

impl Default for SurfaceRefinedSpacing {
    fn default() -> Self {
        Self { theta_s: 5.0 }
    }
}

impl LayerSpacing for SurfaceRefinedSpacing {
    fn face_fractions(&self, n_layers: usize) -> Vec<f64> {
        let mut faces: Vec<f64> = UniformSpacing
            .face_fractions(n_layers)
            .into_iter()
            .map(|s| self.stretch(s))
            .collect();
        // Pin the end points against cosh round-off
        if let Some(first) = faces.first_mut() {
            *first = -1.0;
        }
        if let Some(last) = faces.last_mut() {
            *last = 0.0;
        }
        faces
    }

    fn name(&self) -> &'static str {
        "surface_refined"
    }

    fn description(&self) -> String {
        format!("surface refined (theta_s={:.1})", self.theta_s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn assert_valid_faces(faces: &[f64], n: usize) {
        assert_eq!(faces.len(), n + 1);
        assert!((faces[0] + 1.0).abs() < TOL, "bottom face should be -1");
        assert!(faces[n].abs() < TOL, "surface face should be 0");
        for k in 1..=n {
            assert!(
                faces[k] > faces[k - 1],
                "faces should increase: s[{}]={} <= s[{}]={}",
                k,
                faces[k],
                k - 1,
                faces[k - 1]
            );
        }
    }

    #[test]
    fn test_uniform_faces() {
        let faces = UniformSpacing.face_fractions(10);
        assert_valid_faces(&faces, 10);
        for k in 1..=10 {
            assert!((faces[k] - faces[k - 1] - 0.1).abs() < TOL);
        }
    }

    #[test]
    fn test_surface_refined_faces() {
        let spacing = SurfaceRefinedSpacing::new(5.0);
        let faces = spacing.face_fractions(20);
        assert_valid_faces(&faces, 20);

        let top = faces[20] - faces[19];
        let bottom = faces[1] - faces[0];
        assert!(
            top < bottom,
            "surface layer {} should be thinner than bottom layer {}",
            top,
            bottom
        );
    }

    #[test]
    fn test_zero_theta_is_uniform() {
        let refined = SurfaceRefinedSpacing::new(0.0).face_fractions(8);
        let uniform = UniformSpacing.face_fractions(8);
        for (a, b) in refined.iter().zip(uniform.iter()) {
            assert!((a - b).abs() < TOL);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(UniformSpacing.name(), "uniform");
        assert_eq!(SurfaceRefinedSpacing::default().name(), "surface_refined");
        assert!(SurfaceRefinedSpacing::new(3.0)
            .description()
            .contains("theta_s=3.0"));
    }
}
