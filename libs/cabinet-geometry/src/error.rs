//! # Build Errors
//!
//! Error types for cabinet model construction. Construction fails fast: no
//! partial model is ever returned.

use thiserror::Error;

/// Errors that can occur while building a cabinet model.
#[derive(Debug, Clone, Error)]
pub enum BuildError {
    /// A cabinet dimension is zero or negative.
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Board or back thickness is zero or negative.
    #[error("Invalid thickness: {0}")]
    InvalidThickness(String),

    /// A traverse does not fit the carcass.
    #[error("Invalid traverse: {0}")]
    InvalidTraverse(String),

    /// The front opening cannot hold the requested layout.
    #[error("Invalid front layout: {0}")]
    InvalidFronts(String),
}

impl BuildError {
    /// Creates an invalid-dimensions error.
    pub fn dimensions(message: impl Into<String>) -> Self {
        Self::InvalidDimensions(message.into())
    }

    /// Creates an invalid-thickness error.
    pub fn thickness(message: impl Into<String>) -> Self {
        Self::InvalidThickness(message.into())
    }

    /// Creates an invalid-traverse error.
    pub fn traverse(message: impl Into<String>) -> Self {
        Self::InvalidTraverse(message.into())
    }

    /// Creates an invalid-fronts error.
    pub fn fronts(message: impl Into<String>) -> Self {
        Self::InvalidFronts(message.into())
    }
}
