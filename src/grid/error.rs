//! Error types for grid construction.

use thiserror::Error;

use crate::types::HorizontalExtent;

/// Errors raised while building a grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// A column needs at least one layer.
    #[error("Grid must have at least one vertical layer")]
    NoLayers,

    /// Column depth must be positive and finite.
    #[error("Invalid column depth: {depth}")]
    InvalidDepth {
        /// Offending depth (m).
        depth: f64,
    },

    /// A face coordinate is NaN or infinite.
    #[error("Face {index} is not finite: {value}")]
    NonFiniteFace {
        /// Face position, bottom = 0.
        index: usize,
        /// Offending coordinate.
        value: f64,
    },

    /// Faces must be ordered bottom to surface.
    #[error("Face {index} at z={above} lies below the face beneath it at z={below}")]
    DecreasingFaces {
        /// Index of the out-of-order face.
        index: usize,
        /// z of the face beneath it.
        below: f64,
        /// z of the face itself.
        above: f64,
    },

    /// The top face lies above the surface.
    #[error("Top face at z={z} lies above the surface")]
    AboveSurface {
        /// z of the top face.
        z: f64,
    },

    /// Layer thickness must be finite and non-negative.
    #[error("Layer {layer} has invalid thickness {dz}")]
    InvalidThickness {
        /// Layer index, bottom = 0.
        layer: usize,
        /// Offending thickness.
        dz: f64,
    },

    /// Per-column data does not match the horizontal extent.
    #[error("Expected {expected} column values for extent {extent}, got {actual}")]
    ColumnCountMismatch {
        /// Horizontal extent of the grid.
        extent: HorizontalExtent,
        /// Number of columns in the extent.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
}
