//! Error types for the projection lab core
//!
//! The numeric core itself is total over its documented preconditions and
//! has no failure paths. Errors exist at the edges: resource validation
//! and the graphics-backend seam.

use std::fmt;

/// Result type for projection lab operations
pub type Result<T> = std::result::Result<T, Error>;

/// Projection lab errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Mesh data is inconsistent (index out of range, too many vertices, ...)
    InvalidMesh(String),

    /// Texture data is inconsistent (pixel count does not match dimensions)
    InvalidTexture(String),

    /// Backend-specific error (draw outside a frame, rejected submission, ...)
    BackendError(String),

    /// Initialization failed (window, backend, subsystems)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidMesh(msg) => write!(f, "Invalid mesh: {}", msg),
            Error::InvalidTexture(msg) => write!(f, "Invalid texture: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
