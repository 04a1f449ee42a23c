//! # Mesh Errors
//!
//! Error types for section generation and export. Numeric degeneracy
//! (zero steps, zero span, inverted wall) is never an error: it produces an
//! empty or collapsed mesh instead.

use thiserror::Error;

/// Errors that can occur while generating or writing a section mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Output file could not be created or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A face references a vertex that does not exist
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },
}

impl MeshError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}
