//! Error types for the flight camera
//!
//! The per-frame path never fails: out-of-range angles are wrapped and the
//! field of view is clamped. Errors only come from validating a
//! `CameraDesc` before building a camera from it.

use std::fmt;

/// Result type for flight camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Flight camera errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A tuning parameter is out of its accepted range (negative speed, ...)
    InvalidParameter(String),

    /// A parameter is NaN or infinite
    NonFiniteValue(String),

    /// Projection parameters cannot produce a usable perspective matrix
    InvalidProjection(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::NonFiniteValue(msg) => write!(f, "Non-finite value: {}", msg),
            Error::InvalidProjection(msg) => write!(f, "Invalid projection: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
