//! Error types for ResultForge core

use thiserror::Error;

/// Error raised when a problem schema cannot describe a valid result file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// The schema declares no objectives.
    #[error("schema must declare at least one objective")]
    NoObjectives,

    /// A real variable has unusable bounds.
    #[error("real variable {index} has invalid bounds [{lower_bound}, {upper_bound}]")]
    InvalidBounds {
        index: usize,
        lower_bound: f64,
        upper_bound: f64,
    },

    /// A binary or permutation variable has zero length.
    #[error("{kind} variable {index} must have a non-zero length")]
    EmptyVariable { index: usize, kind: &'static str },
}

/// Result type alias for schema validation
pub type Result<T> = std::result::Result<T, SchemaError>;
