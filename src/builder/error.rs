//! Build errors for record construction.

use thiserror::Error;

/// Errors that can occur when building a record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Field '{0}' defined more than once")]
    DuplicateField(String),

    #[error("Field name must not be empty")]
    EmptyFieldName,
}
