//! Surface-referenced light profiles L(z).
//!
//! A profile gives the irradiance at depth z before self-shading by
//! biomass. It must be pure: the kernel calls it concurrently from every
//! column.

/// Irradiance as a function of the vertical coordinate.
///
/// Any `Fn(f64) -> f64 + Sync` closure is a profile.
///
/// ```
/// use bgc_rs::light::LightProfile;
///
/// let profile = |z: f64| 100.0 * (z / 20.0).exp();
/// assert_eq!(profile.irradiance(0.0), 100.0);
/// ```
pub trait LightProfile: Sync {
    /// Irradiance at z (≤ 0 below the surface).
    fn irradiance(&self, z: f64) -> f64;
}

impl<F> LightProfile for F
where
    F: Fn(f64) -> f64 + Sync,
{
    #[inline]
    fn irradiance(&self, z: f64) -> f64 {
        self(z)
    }
}

/// Depth-independent irradiance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantLight(pub f64);

impl LightProfile for ConstantLight {
    #[inline]
    fn irradiance(&self, _z: f64) -> f64 {
        self.0
    }
}

/// Exponential decay of surface irradiance by clear water:
///
/// ```text
/// L(z) = I₀ · exp(z / λ)
/// ```
///
/// # Example
///
/// ```
/// use bgc_rs::light::{ExponentialLight, LightProfile};
///
/// let par = ExponentialLight::new(60.0, 25.0);
/// assert_eq!(par.irradiance(0.0), 60.0);
/// assert!((par.irradiance(-25.0) - 60.0 / std::f64::consts::E).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExponentialLight {
    /// Surface irradiance I₀.
    pub surface: f64,
    /// E-folding depth λ (m).
    pub e_folding_depth: f64,
}

impl ExponentialLight {
    /// Create a profile from surface irradiance and e-folding depth.
    pub fn new(surface: f64, e_folding_depth: f64) -> Self {
        debug_assert!(
            e_folding_depth > 0.0,
            "e-folding depth must be positive, got {}",
            e_folding_depth
        );
        Self {
            surface,
            e_folding_depth,
        }
    }
}

impl LightProfile for ExponentialLight {
    #[inline]
    fn irradiance(&self, z: f64) -> f64 {
        self.surface * (z / self.e_folding_depth).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant() {
        let light = ConstantLight(100.0);
        assert_eq!(light.irradiance(-1000.0), 100.0);
    }

    #[test]
    fn test_exponential_decreases_with_depth() {
        let light = ExponentialLight::new(200.0, 10.0);
        let mut previous = light.irradiance(0.0);
        for step in 1..20 {
            let current = light.irradiance(-(step as f64) * 5.0);
            assert!(current < previous);
            previous = current;
        }
    }

    #[test]
    fn test_closure_profile() {
        fn takes_profile<P: LightProfile>(p: &P) -> f64 {
            p.irradiance(-2.0)
        }
        assert_eq!(takes_profile(&|z: f64| -z), 2.0);
    }
}
