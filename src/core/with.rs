//! With-engine: derive a modified copy of an owning object.

use super::error::{ImmutableError, ImmutableResult};
use super::name::resolve_field_name;
use super::value::{FromValue, Value};

/// Field-slot access for owning objects.
///
/// `put_field` consumes the object, so it can only ever change a value the
/// caller owns outright; shared instances are never written to.
pub trait Fields: Sized {
    /// Names of every field slot.
    fn field_names(&self) -> Vec<&str>;

    /// Current value of a field, or `None` when no such field exists.
    fn field(&self, name: &str) -> Option<Value>;

    /// Assign `value` to the named slot.
    ///
    /// Fails with [`ImmutableError::UnknownField`] when the field does not
    /// exist and [`ImmutableError::TypeMismatch`] when the value does not
    /// fit the slot.
    fn put_field(self, name: &str, value: Value) -> ImmutableResult<Self>;
}

/// Clone `owner` and set the field named by `mutator` on the clone.
///
/// The owner is never modified. Fields other than the resolved one keep
/// their values as produced by the owner's `Clone`.
///
/// # Example
///
/// ```rust
/// use immutable::core::{with_field, Record, Value};
///
/// let counter = Record::new([("Count", 5)]);
/// let bumped = with_field(&counter, "withCount", 10).unwrap();
///
/// assert_eq!(bumped.get("Count"), Some(&Value::Int(10)));
/// assert_eq!(counter.get("Count"), Some(&Value::Int(5)));
/// ```
pub fn with_field<T>(owner: &T, mutator: &str, value: impl Into<Value>) -> ImmutableResult<T>
where
    T: Fields + Clone,
{
    let field = resolve_field_name(mutator);
    let updated = owner.clone().put_field(field, value.into())?;
    tracing::trace!(mutator, field, "derived copy with updated field");
    Ok(updated)
}

/// Clone `owner` and set the field named by `mutator` to null.
///
/// Uses the same name resolution as [`with_field`], so `"withoutFoo"`
/// targets `outFoo`; pass `"withFoo"` to clear `Foo`.
pub fn without_field<T>(owner: &T, mutator: &str) -> ImmutableResult<T>
where
    T: Fields + Clone,
{
    with_field(owner, mutator, Value::Null)
}

/// Convert a dynamic value into the type of the named field slot.
pub fn convert_field<T: FromValue>(field: &str, value: Value) -> ImmutableResult<T> {
    let found = value.kind();
    T::from_value(value).ok_or_else(|| ImmutableError::TypeMismatch {
        field: field.to_string(),
        expected: T::EXPECTED,
        found,
    })
}
