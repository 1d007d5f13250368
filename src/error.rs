//! Error types for the dsd library.
//!
//! This module provides error handling using the `thiserror` crate, with
//! specific variants for input validation at the construction entry points
//! and for factor-specification problems at the builder level.

use thiserror::Error;

/// The main error type for the dsd library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The design choice string is not one of the supported values.
    #[error("design choice must be \"dsd\" or \"orth\", got {0:?}")]
    UnknownDesignChoice(String),

    /// Invalid construction parameters.
    #[error("invalid parameters: {message}")]
    InvalidParams {
        /// Description of what is invalid.
        message: String,
    },

    /// A factor specification does not carry exactly two levels.
    #[error("factor {name:?} must specify exactly 2 levels, got {count}")]
    BadFactorLevels {
        /// Name of the offending factor.
        name: String,
        /// Number of levels that were supplied.
        count: usize,
    },

    /// Matrix dimensions are inconsistent with the declared parameters.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension description.
        expected: String,
        /// Actual dimension description.
        actual: String,
    },
}

/// A specialized `Result` type for dsd operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `InvalidParams` error.
    #[must_use]
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }
}
