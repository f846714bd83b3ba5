//! Error types for the Galaxy3D frame composer
//!
//! This module defines the error types used throughout the composer,
//! including device allocation, lifecycle ordering, and resource validation.

use std::fmt;

/// Result type for Galaxy3D composer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D composer errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (device allocation, draw submission, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (missing depth attachment, unknown target, etc.)
    InvalidResource(String),

    /// Initialization failed (render targets, worker threads)
    InitializationFailed(String),

    /// Lifecycle call made from the wrong state (compose before initialize, etc.)
    InvalidState(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
