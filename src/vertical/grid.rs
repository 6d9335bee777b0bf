//! Layered vertical grid for a single water column.
//!
//! Faces are stored bottom to surface. Cell centers are face midpoints and
//! thicknesses are face differences, so Σ Δz equals the column depth to
//! round-off.

use super::spacing::{LayerSpacing, UniformSpacing};
use crate::grid::GridError;
use crate::types::{Depth, LevelIndex};

/// Vertical layer geometry: faces, centers and thicknesses.
///
/// Index 0 is the bottom layer, index `n_layers - 1` the surface layer.
/// All z values are ≤ 0.
///
/// # Example
///
/// ```
/// use bgc_rs::vertical::VerticalGrid;
///
/// let grid = VerticalGrid::from_thicknesses(&[10.0, 10.0, 10.0]).unwrap();
/// assert_eq!(grid.centers(), &[-25.0, -15.0, -5.0]);
/// assert_eq!(grid.thicknesses(), &[10.0, 10.0, 10.0]);
/// ```
#[derive(Clone)]
pub struct VerticalGrid {
    /// z at layer faces, length n_layers + 1.
    faces: Vec<f64>,
    /// z at layer centers, length n_layers.
    centers: Vec<f64>,
    /// Δz per layer, length n_layers.
    thicknesses: Vec<f64>,
    /// Description of how the faces were produced.
    description: String,
}

impl VerticalGrid {
    /// Distribute `n_layers` layers over `depth` with the given spacing.
    pub fn new(
        depth: Depth,
        n_layers: usize,
        spacing: impl LayerSpacing,
    ) -> Result<Self, GridError> {
        if n_layers == 0 {
            return Err(GridError::NoLayers);
        }
        let h = depth.meters();
        if !(h.is_finite() && h > 0.0) {
            return Err(GridError::InvalidDepth { depth: h });
        }

        let faces: Vec<f64> = spacing
            .face_fractions(n_layers)
            .into_iter()
            .map(|s| s * h)
            .collect();

        let mut grid = Self::from_faces(faces)?;
        grid.description = format!("{} over {}", spacing.description(), depth);
        Ok(grid)
    }

    /// Equal-thickness layers over `depth`.
    #[inline]
    pub fn uniform(depth: Depth, n_layers: usize) -> Result<Self, GridError> {
        Self::new(depth, n_layers, UniformSpacing)
    }

    /// Build from explicit face positions, bottom to surface.
    ///
    /// Faces must be finite, non-decreasing and not above the surface.
    /// Zero-thickness layers are allowed.
    pub fn from_faces(faces: Vec<f64>) -> Result<Self, GridError> {
        if faces.len() < 2 {
            return Err(GridError::NoLayers);
        }
        if let Some((index, &value)) = faces.iter().enumerate().find(|(_, z)| !z.is_finite()) {
            return Err(GridError::NonFiniteFace { index, value });
        }
        for k in 1..faces.len() {
            if faces[k] < faces[k - 1] {
                return Err(GridError::DecreasingFaces {
                    index: k,
                    below: faces[k - 1],
                    above: faces[k],
                });
            }
        }
        let top = faces[faces.len() - 1];
        if top > 0.0 {
            return Err(GridError::AboveSurface { z: top });
        }

        let n_layers = faces.len() - 1;
        let centers = (0..n_layers)
            .map(|k| 0.5 * (faces[k] + faces[k + 1]))
            .collect();
        let thicknesses = (0..n_layers).map(|k| faces[k + 1] - faces[k]).collect();

        Ok(Self {
            faces,
            centers,
            thicknesses,
            description: format!("explicit faces ({} layers)", n_layers),
        })
    }

    /// Build from layer thicknesses listed bottom to surface, stacked
    /// downward from z = 0.
    ///
    /// ```
    /// use bgc_rs::vertical::VerticalGrid;
    ///
    /// let grid = VerticalGrid::from_thicknesses(&[20.0, 5.0, 1.0]).unwrap();
    /// assert_eq!(grid.faces(), &[-26.0, -6.0, -1.0, 0.0]);
    /// ```
    pub fn from_thicknesses(thicknesses: &[f64]) -> Result<Self, GridError> {
        if thicknesses.is_empty() {
            return Err(GridError::NoLayers);
        }
        if let Some((layer, &dz)) = thicknesses
            .iter()
            .enumerate()
            .find(|(_, dz)| !(dz.is_finite() && **dz >= 0.0))
        {
            return Err(GridError::InvalidThickness { layer, dz });
        }

        let mut faces = vec![0.0; thicknesses.len() + 1];
        for k in (0..thicknesses.len()).rev() {
            faces[k] = faces[k + 1] - thicknesses[k];
        }
        Self::from_faces(faces)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of layers.
    #[inline]
    pub fn n_layers(&self) -> usize {
        self.centers.len()
    }

    /// Face z values, bottom to surface.
    #[inline]
    pub fn faces(&self) -> &[f64] {
        &self.faces
    }

    /// Center z values, bottom to surface.
    #[inline]
    pub fn centers(&self) -> &[f64] {
        &self.centers
    }

    /// Layer thicknesses, bottom to surface.
    #[inline]
    pub fn thicknesses(&self) -> &[f64] {
        &self.thicknesses
    }

    /// Center z of layer `k`.
    #[inline]
    pub fn z_center(&self, k: LevelIndex) -> f64 {
        self.centers[k]
    }

    /// Thickness of layer `k`.
    #[inline]
    pub fn dz(&self, k: LevelIndex) -> f64 {
        self.thicknesses[k]
    }

    /// Distance from the top face to the bottom face.
    #[inline]
    pub fn total_depth(&self) -> Depth {
        Depth::new_unchecked(self.faces[self.n_layers()] - self.faces[0])
    }

    /// How the faces were produced.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of layers whose center lies strictly above `-h`.
    pub fn mixed_layer_count(&self, h: Depth) -> usize {
        self.centers.iter().filter(|&&z| z > -h.meters()).count()
    }
}

impl std::fmt::Debug for VerticalGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerticalGrid")
            .field("n_layers", &self.n_layers())
            .field("description", &self.description)
            .finish()
    }
}

impl std::fmt::Display for VerticalGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VerticalGrid({} layers, {})", self.n_layers(), self.description)
    }
}
