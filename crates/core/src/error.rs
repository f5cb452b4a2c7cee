//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The aging rules themselves define no failure states (malformed items are
/// accepted and corrected by the next pass), so the only errors here are the
/// deterministic parse failures raised when reading items from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An inventory line did not match the `name, sell_in, quality` shape.
    #[error("malformed inventory line: {0:?}")]
    MalformedLine(String),

    /// A numeric field of an inventory line failed to parse.
    #[error("invalid {field} value {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

impl DomainError {
    pub fn malformed_line(line: impl Into<String>) -> Self {
        Self::MalformedLine(line.into())
    }

    pub fn invalid_number(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            value: value.into(),
        }
    }
}
