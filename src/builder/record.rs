//! Builder for constructing records.

use crate::builder::error::BuildError;
use crate::core::{Record, Value};

/// Builder for [`Record`]s with a fluent API.
///
/// Unlike [`Record::new`], the builder rejects repeated and empty field
/// names, since a record's field set cannot change after it is built.
///
/// # Example
///
/// ```rust
/// use immutable::builder::RecordBuilder;
/// use immutable::core::Value;
///
/// let event = RecordBuilder::new()
///     .field("Summary", "standup")
///     .field("Attendees", vec!["ana", "bo"])
///     .empty("Location")
///     .build()
///     .unwrap();
///
/// assert_eq!(event.len(), 3);
/// assert_eq!(event.get("Location"), Some(&Value::Null));
/// ```
#[derive(Debug, Default)]
pub struct RecordBuilder {
    fields: Vec<(String, Value)>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field with its initial value.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Add a field that starts out null.
    pub fn empty(self, name: impl Into<String>) -> Self {
        self.field(name, Value::Null)
    }

    /// Build the record.
    /// Returns an error on the first empty or repeated field name.
    pub fn build(self) -> Result<Record, BuildError> {
        let mut seen = std::collections::BTreeSet::new();
        for (name, _) in &self.fields {
            if name.is_empty() {
                return Err(BuildError::EmptyFieldName);
            }
            if !seen.insert(name.as_str()) {
                return Err(BuildError::DuplicateField(name.clone()));
            }
        }

        Ok(self.fields.into_iter().collect())
    }
}
