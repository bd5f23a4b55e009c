//! Error types for gridboard.
//!
//! Only configuration handling can fail. Geometry transforms and model
//! operations are total functions with saturating clamps; calls referencing
//! an unknown box id are silent no-ops rather than errors.

use thiserror::Error;

/// Errors that can occur while building or parsing grid configuration.
#[derive(Error, Debug)]
pub enum GridError {
    /// A grid parameter is out of range or not finite.
    #[error("Invalid grid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// JSON deserialization of grid configuration failed.
    #[error("Failed to parse grid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Convenience result alias for configuration operations.
pub type Result<T> = std::result::Result<T, GridError>;
