//! Light-limitation functions g(light).
//!
//! Each maps irradiance to a dimensionless growth multiplier that is 0 in
//! the dark and saturates at high light. They are nonlinear, which is why
//! the order of averaging and applying g matters.

/// Growth multiplier as a function of light.
///
/// Any `Fn(f64) -> f64 + Sync` closure is a response.
pub trait LightResponse: Sync {
    /// Growth multiplier at irradiance `light`.
    fn growth(&self, light: f64) -> f64;
}

impl<F> LightResponse for F
where
    F: Fn(f64) -> f64 + Sync,
{
    #[inline]
    fn growth(&self, light: f64) -> f64 {
        self(light)
    }
}

/// Michaelis–Menten (Monod) saturation:
///
/// ```text
/// g(I) = I / (K + I)
/// ```
///
/// # Example
///
/// ```
/// use bgc_rs::light::{LightResponse, MichaelisMenten};
///
/// let g = MichaelisMenten::new(1.0);
/// assert_eq!(g.growth(100.0), 100.0 / 101.0);
/// assert_eq!(g.growth(1.0), 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MichaelisMenten {
    /// Irradiance at which growth is half of maximum.
    pub half_saturation: f64,
}

impl MichaelisMenten {
    /// Create with half-saturation irradiance `k`.
    pub fn new(half_saturation: f64) -> Self {
        Self { half_saturation }
    }
}

impl LightResponse for MichaelisMenten {
    #[inline]
    fn growth(&self, light: f64) -> f64 {
        light / (self.half_saturation + light)
    }
}

/// Jassby–Platt hyperbolic tangent:
///
/// ```text
/// g(I) = tanh(I / Iₖ)
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JassbyPlatt {
    /// Saturation irradiance Iₖ.
    pub saturation: f64,
}

impl JassbyPlatt {
    /// Create with saturation irradiance `ik`.
    pub fn new(saturation: f64) -> Self {
        Self { saturation }
    }
}

impl LightResponse for JassbyPlatt {
    #[inline]
    fn growth(&self, light: f64) -> f64 {
        (light / self.saturation).tanh()
    }
}

/// Blackman piecewise-linear limitation:
///
/// ```text
/// g(I) = min(I / Iₖ, 1)
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blackman {
    /// Saturation irradiance Iₖ.
    pub saturation: f64,
}

impl Blackman {
    /// Create with saturation irradiance `ik`.
    pub fn new(saturation: f64) -> Self {
        Self { saturation }
    }
}

impl LightResponse for Blackman {
    #[inline]
    fn growth(&self, light: f64) -> f64 {
        (light / self.saturation).min(1.0)
    }
}
