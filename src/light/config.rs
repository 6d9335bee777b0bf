//! Optical constants of the self-shading model.

/// Default chlorophyll per unit phytoplankton biomass.
pub const DEFAULT_CHL2C: f64 = 0.06;

/// Default chlorophyll-specific light attenuation coefficient.
pub const DEFAULT_KC: f64 = 0.03;

/// Constants of the Beer–Lambert self-shading model.
///
/// Light at a layer is divided by `exp(Kc · Σ P · chl2c · Δz)`, the sum
/// running from the surface down to and including that layer.
///
/// # Example
///
/// ```
/// use bgc_rs::light::OpticalConfig;
///
/// let optics = OpticalConfig::default().with_kc(0.05);
/// assert_eq!(optics.kc, 0.05);
/// assert_eq!(optics.chl2c, bgc_rs::light::DEFAULT_CHL2C);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpticalConfig {
    /// Chlorophyll-to-biomass conversion factor (`chl2c`).
    pub chl2c: f64,
    /// Attenuation per unit integrated chlorophyll (`Kc`).
    pub kc: f64,
}

impl Default for OpticalConfig {
    fn default() -> Self {
        Self {
            chl2c: DEFAULT_CHL2C,
            kc: DEFAULT_KC,
        }
    }
}

impl OpticalConfig {
    /// Create a config with explicit constants.
    pub fn new(chl2c: f64, kc: f64) -> Self {
        debug_assert!(chl2c >= 0.0, "chl2c must be non-negative, got {}", chl2c);
        debug_assert!(kc >= 0.0, "kc must be non-negative, got {}", kc);
        Self { chl2c, kc }
    }

    /// Optically transparent water: biomass does not shade.
    pub fn transparent() -> Self {
        Self { chl2c: 0.0, kc: 0.0 }
    }

    /// Set the chlorophyll-to-biomass factor.
    pub fn with_chl2c(mut self, chl2c: f64) -> Self {
        self.chl2c = chl2c;
        self
    }

    /// Set the attenuation coefficient.
    pub fn with_kc(mut self, kc: f64) -> Self {
        self.kc = kc;
        self
    }

    /// Increment of integrated chlorophyll contributed by one layer.
    #[inline]
    pub fn chlorophyll_path(&self, biomass: f64, dz: f64) -> f64 {
        biomass * self.chl2c * dz
    }

    /// Light left of `irradiance` after passing through `chlinteg`.
    #[inline]
    pub fn attenuate(&self, irradiance: f64, chlinteg: f64) -> f64 {
        irradiance / (chlinteg * self.kc).exp()
    }

    /// Fraction of surface-referenced light left after `chlinteg`.
    #[inline]
    pub fn transmission(&self, chlinteg: f64) -> f64 {
        self.attenuate(1.0, chlinteg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-14;

    #[test]
    fn test_builder() {
        let optics = OpticalConfig::new(0.1, 0.2).with_chl2c(0.3);
        assert_eq!(optics, OpticalConfig { chl2c: 0.3, kc: 0.2 });
    }

    #[test]
    fn test_transmission() {
        let optics = OpticalConfig::new(1.0, 0.5);
        assert!((optics.transmission(0.0) - 1.0).abs() < TOL);
        assert!((optics.transmission(2.0) - (-1.0_f64).exp()).abs() < TOL);
        assert_eq!(OpticalConfig::transparent().transmission(1e6), 1.0);
    }

    #[test]
    fn test_chlorophyll_path() {
        let optics = OpticalConfig::new(0.5, 1.0);
        assert!((optics.chlorophyll_path(2.0, 10.0) - 10.0).abs() < TOL);
    }
}
