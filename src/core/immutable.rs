//! Mixable immutability capability.
//!
//! `Immutable` bundles the free functions of this module tree into methods
//! on the owning type, and adds the access guard on top. Implementing it
//! only requires [`Fields`] and `Clone`; every method has a default.

use super::clone;
use super::error::ImmutableResult;
use super::guard::{intercept_set, intercept_unset};
use super::name;
use super::value::Value;
use super::with::{with_field, without_field, Fields};

/// Capability for value objects whose changes always produce a new instance.
///
/// # Example
///
/// ```rust
/// use immutable::core::{Immutable, Record, Value, ViolationKind};
///
/// let event = Record::new([("Summary", Value::from("standup")), ("Location", Value::Null)]);
///
/// let placed = event.with("withLocation", "room 4").unwrap();
/// assert!(placed.has("Location"));
/// assert!(!event.has("Location"));
///
/// let err = event.set("Location", "elsewhere").unwrap_err();
/// assert_eq!(err.code(), Some(ViolationKind::Set.code()));
/// ```
pub trait Immutable: Fields + Clone {
    /// Return a copy with the field named by `mutator` set to `value`.
    fn with(&self, mutator: &str, value: impl Into<Value>) -> ImmutableResult<Self> {
        with_field(self, mutator, value)
    }

    /// Return a copy with the field named by `mutator` set to null.
    ///
    /// The mutator name resolves exactly as for [`with`](Self::with).
    fn without(&self, mutator: &str) -> ImmutableResult<Self> {
        without_field(self, mutator)
    }

    /// Direct assignment. Always rejected with a `Set` violation.
    fn set(&self, field: &str, value: impl Into<Value>) -> ImmutableResult<()> {
        intercept_set::<Value>(field, value.into())?;
        Ok(())
    }

    /// Direct removal. Always rejected with an `Unset` violation.
    fn unset(&self, field: &str) -> ImmutableResult<()> {
        intercept_unset(field)?;
        Ok(())
    }

    fn resolve_field_name(mutator: &str) -> &str {
        name::resolve_field_name(mutator)
    }

    fn clone_deep(value: &mut Value) {
        clone::clone_deep(value)
    }
}

impl Immutable for super::record::Record {}
