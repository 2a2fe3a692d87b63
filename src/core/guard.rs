//! Access guard for direct field writes.
//!
//! Guarded objects expose no way to change a field in place. Every direct
//! write or removal attempt is intercepted here and rejected; the only way
//! to obtain a changed object is through `with`/`without`, which return a
//! modified copy.

use thiserror::Error;

/// Code carried by a rejected direct write.
pub const SET_VIOLATION_CODE: u32 = 1_504_012_134;

/// Code carried by a rejected direct removal.
pub const UNSET_VIOLATION_CODE: u32 = 1_504_013_024;

/// Which forbidden operation was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Direct assignment of a field
    Set,

    /// Direct removal of a field
    Unset,
}

impl ViolationKind {
    /// Stable code identifying the violation kind.
    pub fn code(self) -> u32 {
        match self {
            Self::Set => SET_VIOLATION_CODE,
            Self::Unset => UNSET_VIOLATION_CODE,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Set => "Unable to set property in immutable object",
            Self::Unset => "Unable to unset property in immutable object",
        }
    }
}

/// A rejected attempt to mutate a guarded object in place.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message} (field '{field}', code {code})", message = .kind.message(), code = .kind.code())]
pub struct WriteViolation {
    pub kind: ViolationKind,
    pub field: String,
}

impl WriteViolation {
    pub fn code(&self) -> u32 {
        self.kind.code()
    }
}

/// Reject a direct field assignment.
///
/// There is no success path: the value is dropped and the field is never
/// touched.
///
/// # Example
///
/// ```rust
/// use immutable::core::{intercept_set, ViolationKind};
///
/// let err = intercept_set("Count", 10).unwrap_err();
/// assert_eq!(err.kind, ViolationKind::Set);
/// assert_eq!(err.code(), 1504012134);
/// ```
pub fn intercept_set<V>(field: &str, _value: V) -> Result<(), WriteViolation> {
    Err(reject(ViolationKind::Set, field))
}

/// Reject a direct field removal.
///
/// # Example
///
/// ```rust
/// use immutable::core::{intercept_unset, ViolationKind};
///
/// let err = intercept_unset("Count").unwrap_err();
/// assert_eq!(err.kind, ViolationKind::Unset);
/// assert_eq!(err.code(), 1504013024);
/// ```
pub fn intercept_unset(field: &str) -> Result<(), WriteViolation> {
    Err(reject(ViolationKind::Unset, field))
}

fn reject(kind: ViolationKind, field: &str) -> WriteViolation {
    tracing::debug!(?kind, field, "rejected direct write on immutable object");
    WriteViolation {
        kind,
        field: field.to_string(),
    }
}
