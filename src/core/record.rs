//! Guarded dynamic record.
//!
//! A `Record` is an owning object whose field set is fixed when it is built.
//! It exposes read-only accessors only; changed copies are derived through
//! the [`Immutable`](super::Immutable) capability.

use super::error::{ImmutableError, ImmutableResult};
use super::name::resolve_field_name;
use super::value::Value;
use super::with::Fields;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Dynamic owning object with a fixed, named set of fields.
///
/// # Example
///
/// ```rust
/// use immutable::core::{Immutable, Record, Value};
///
/// let counter = Record::new([("Count", 5)]);
/// let bumped = counter.with("withCount", 10).unwrap();
///
/// assert_eq!(counter.get("Count"), Some(&Value::Int(5)));
/// assert_eq!(bumped.get("Count"), Some(&Value::Int(10)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Build a record from `(name, value)` pairs.
    ///
    /// A repeated name keeps its last value; use
    /// [`RecordBuilder`](crate::builder::RecordBuilder) to reject duplicates.
    pub fn new<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        fields
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// True when the field exists and is not null.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_null())
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Apply several named updates at once, returning a new record.
    ///
    /// Every mutator name is resolved and checked before anything is
    /// applied; all unknown fields are reported together.
    ///
    /// # Example
    ///
    /// ```rust
    /// use immutable::core::{ImmutableError, Record, Value};
    ///
    /// let event = Record::new([("Summary", "standup"), ("Room", "4")]);
    ///
    /// let moved = event
    ///     .with_fields([("withRoom", Value::from("7")), ("withSummary", Value::from("sync"))])
    ///     .unwrap();
    /// assert_eq!(moved.get("Room"), Some(&Value::from("7")));
    ///
    /// let err = event
    ///     .with_fields([("withStart", Value::Null), ("withEnd", Value::Null)])
    ///     .unwrap_err();
    /// assert!(matches!(err, ImmutableError::UnknownFields { fields } if fields.len() == 2));
    /// ```
    pub fn with_fields<'a, I>(&self, updates: I) -> ImmutableResult<Self>
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        let updates: Vec<(&str, Value)> = updates
            .into_iter()
            .map(|(mutator, value)| (resolve_field_name(mutator), value))
            .collect();

        let checks: Vec<Validation<(), NonEmptyVec<String>>> = updates
            .iter()
            .map(|(field, _)| {
                if self.contains_field(field) {
                    Validation::success(())
                } else {
                    Validation::fail(field.to_string())
                }
            })
            .collect();

        if let Validation::Failure(missing) = Validation::all_vec(checks) {
            return Err(ImmutableError::UnknownFields {
                fields: missing.iter().cloned().collect(),
            });
        }

        let mut next = self.clone();
        for (field, value) in updates {
            next.fields.insert(field.to_string(), value);
        }
        tracing::trace!(fields = next.len(), "derived record from batch update");
        Ok(next)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl Fields for Record {
    fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn put_field(mut self, name: &str, value: Value) -> ImmutableResult<Self> {
        match self.fields.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(self)
            }
            None => Err(ImmutableError::unknown_field(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> Record {
        Record::new([
            ("Summary", Value::from("standup")),
            ("Attendees", Value::from(vec!["ana", "bo"])),
            ("Location", Value::Null),
        ])
    }

    #[test]
    fn new_keeps_last_duplicate() {
        let record = Record::new([("a", 1), ("a", 2)]);
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("a"), Some(&Value::Int(2)));
    }

    #[test]
    fn has_treats_null_as_absent() {
        let record = event();
        assert!(record.has("Summary"));
        assert!(!record.has("Location"));
        assert!(record.contains_field("Location"));
        assert!(!record.has("Missing"));
    }

    #[test]
    fn put_field_replaces_existing_slot() {
        let record = event().put_field("Summary", Value::from("retro")).unwrap();
        assert_eq!(record.get("Summary"), Some(&Value::from("retro")));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn put_field_rejects_unknown_field() {
        let err = event().put_field("Start", Value::Int(9)).unwrap_err();
        assert_eq!(err, ImmutableError::unknown_field("Start"));
    }

    #[test]
    fn field_names_are_sorted() {
        assert_eq!(event().field_names(), vec!["Attendees", "Location", "Summary"]);
    }

    #[test]
    fn with_fields_leaves_original_untouched() {
        let original = event();
        let updated = original
            .with_fields([("withLocation", Value::from("room 4"))])
            .unwrap();

        assert!(!original.has("Location"));
        assert!(updated.has("Location"));
    }

    #[test]
    fn with_fields_reports_every_unknown_field() {
        let err = event()
            .with_fields([
                ("withStart", Value::Int(1)),
                ("withSummary", Value::from("ok")),
                ("withEnd", Value::Int(2)),
            ])
            .unwrap_err();

        assert_eq!(
            err,
            ImmutableError::UnknownFields {
                fields: vec!["Start".to_string(), "End".to_string()],
            }
        );
    }

    #[test]
    fn record_serializes_as_plain_object() {
        let record = Record::new([("Count", 5)]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"Count":{"Int":5}}"#);

        let deserialized: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
