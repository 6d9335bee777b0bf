//! Physical quantity newtypes for the vertical direction.
//!
//! Depths are positive distances below the surface, z-coordinates are
//! negative below the surface. Keeping them apart matters here because the
//! mixed-layer test compares one against the negation of the other.

use std::fmt;

// =============================================================================
// Depth (positive distance below the surface)
// =============================================================================

/// Distance below the sea surface, always non-negative.
///
/// Used for water-column depth and for the mixed-layer depth `h`.
///
/// # Example
///
/// ```
/// use bgc_rs::types::Depth;
///
/// let h = Depth::new(25.0);
/// assert_eq!(h.meters(), 25.0);
/// assert_eq!(h.as_z().meters(), -25.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Depth(f64);

impl Depth {
    /// Create a new depth value.
    ///
    /// # Panics
    ///
    /// Debug-panics if depth is negative.
    #[inline]
    pub fn new(meters: f64) -> Self {
        debug_assert!(meters >= 0.0, "Depth must be non-negative, got {}", meters);
        Self(meters)
    }

    /// Create depth without validation (for hot paths).
    #[inline]
    pub const fn new_unchecked(meters: f64) -> Self {
        Self(meters)
    }

    /// Zero depth.
    pub const ZERO: Self = Self(0.0);

    /// Get the depth in meters.
    #[inline]
    pub fn meters(self) -> f64 {
        self.0
    }

    /// The z-coordinate lying this far below the surface.
    #[inline]
    pub fn as_z(self) -> PhysicalZ {
        PhysicalZ(-self.0)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}m", self.0)
    }
}

impl From<Depth> for f64 {
    #[inline]
    fn from(d: Depth) -> f64 {
        d.0
    }
}

// =============================================================================
// PhysicalZ (vertical position)
// =============================================================================

/// Vertical coordinate in meters, zero at the surface and negative below.
///
/// # Example
///
/// ```
/// use bgc_rs::types::{Depth, PhysicalZ};
///
/// let z = PhysicalZ::new(-5.0);
/// assert!(z.is_above(Depth::new(10.0)));
/// assert!(!z.is_above(Depth::new(5.0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct PhysicalZ(f64);

impl PhysicalZ {
    /// Create a new z-coordinate.
    #[inline]
    pub const fn new(meters: f64) -> Self {
        Self(meters)
    }

    /// The surface, z = 0.
    pub const SURFACE: Self = Self(0.0);

    /// Get z in meters.
    #[inline]
    pub fn meters(self) -> f64 {
        self.0
    }

    /// Depth below the surface corresponding to this coordinate.
    #[inline]
    pub fn depth(self) -> Depth {
        Depth(-self.0)
    }

    /// Strictly shallower than `depth`: `z > -depth`.
    ///
    /// This is the mixed-layer membership test applied to cell centers.
    #[inline]
    pub fn is_above(self, depth: Depth) -> bool {
        self.0 > -depth.0
    }
}

impl fmt::Display for PhysicalZ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "z={:.2}m", self.0)
    }
}

impl From<PhysicalZ> for f64 {
    #[inline]
    fn from(z: PhysicalZ) -> f64 {
        z.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_z_conversion() {
        let h = Depth::new(12.5);
        assert_eq!(h.as_z().meters(), -12.5);
        assert_eq!(h.as_z().depth(), h);
    }

    #[test]
    fn test_is_above_is_strict() {
        let h = Depth::new(15.0);
        assert!(PhysicalZ::new(-14.999).is_above(h));
        assert!(!PhysicalZ::new(-15.0).is_above(h));
        assert!(!PhysicalZ::new(-25.0).is_above(h));
    }

    #[test]
    fn test_zero_depth_excludes_everything_below_surface() {
        assert!(!PhysicalZ::new(-1e-9).is_above(Depth::ZERO));
        assert!(!PhysicalZ::SURFACE.is_above(Depth::ZERO));
    }

    #[test]
    fn test_display() {
        assert_eq!(Depth::new(3.0).to_string(), "3.00m");
        assert_eq!(PhysicalZ::new(-3.0).to_string(), "z=-3.00m");
    }
}
