//! Error types for immutable field updates.

use super::guard::WriteViolation;
use thiserror::Error;

/// Result type for with/without operations.
pub type ImmutableResult<T> = Result<T, ImmutableError>;

/// Errors raised when deriving a modified copy of an immutable object.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ImmutableError {
    /// Direct external write or removal was attempted.
    #[error(transparent)]
    Violation(#[from] WriteViolation),

    #[error("Unknown field '{field}'")]
    UnknownField { field: String },

    #[error("Unknown fields: {}", .fields.join(", "))]
    UnknownFields { fields: Vec<String> },

    #[error("Field '{field}' expects {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl ImmutableError {
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Stable numeric code for guard violations, `None` otherwise.
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::Violation(violation) => Some(violation.code()),
            _ => None,
        }
    }
}
