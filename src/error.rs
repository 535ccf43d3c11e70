//! Error types for engine operations
//!
//! The engine treats insufficient data as a degraded-but-valid condition, not
//! an error; the only hard failures are malformed parameter imports and bad
//! configuration values, so the error surface stays small.

use std::fmt;

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Error type for engine operations
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Dimension mismatch between imported parameters and the network config
    ShapeMismatch {
        expected: usize,
        got: usize,
        context: String,
    },

    /// Invalid parameter value
    InvalidParameter {
        parameter: String,
        value: String,
        constraint: String,
    },

    /// Snapshot could not be encoded or decoded
    Snapshot(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::ShapeMismatch {
                expected,
                got,
                context,
            } => {
                write!(
                    f,
                    "Shape mismatch in {}: expected {} elements, got {}",
                    context, expected, got
                )
            }
            EngineError::InvalidParameter {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = '{}': must satisfy {}",
                    parameter, value, constraint
                )
            }
            EngineError::Snapshot(msg) => write!(f, "Snapshot error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

impl EngineError {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: usize, got: usize, context: impl Into<String>) -> Self {
        EngineError::ShapeMismatch {
            expected,
            got,
            context: context.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(
        parameter: impl Into<String>,
        value: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        EngineError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            constraint: constraint.into(),
        }
    }
}
