//! # Mesh Errors
//!
//! Error types for mesh generation.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Degenerate geometry (zero or negative extents).
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Too few segments for a round part.
    #[error("Too few segments: {count} (min: {min})")]
    TooFewSegments { count: u32, min: u32 },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}
