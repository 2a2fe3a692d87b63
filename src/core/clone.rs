//! Recursive cloning of nested containers and objects.
//!
//! Cloning an owning object copies its slots, but object handles inside
//! those slots stay shared. The functions here walk a value in place and
//! replace every nested object with an independent duplicate:
//!
//! - containers (`List`, `Map`) are traversed recursively
//! - objects are replaced by a one-level duplicate of the record
//! - scalars are left alone, they cannot alias

use super::record::Record;
use super::value::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Clone the nested contents of a single slot in place.
///
/// The slot itself is rewritten; anything the caller still holds from
/// before the call keeps pointing at the original objects.
///
/// # Example
///
/// ```rust
/// use immutable::core::{clone_deep, Record, Value};
///
/// let item = Value::from(Record::new([("Name", "a")]));
/// let original = Value::List(vec![item.clone(), Value::Int(1)]);
///
/// let mut copy = original.clone();
/// clone_deep(&mut copy);
///
/// assert_eq!(copy, original);
/// assert!(!copy.as_list().unwrap()[0].same_object(&item));
/// ```
pub fn clone_deep(value: &mut Value) {
    match value {
        Value::List(items) => clone_deep_list(items),
        Value::Map(entries) => clone_deep_map(entries),
        Value::Object(object) => *object = duplicate(object),
        _ => {}
    }
}

/// Clone every nested container and object of an ordered container.
pub fn clone_deep_list(items: &mut [Value]) {
    items.iter_mut().for_each(clone_deep);
}

/// Clone every nested container and object of a keyed container.
pub fn clone_deep_map(entries: &mut BTreeMap<String, Value>) {
    entries.values_mut().for_each(clone_deep);
}

/// Copy a value and clone its nested contents, leaving `value` untouched.
///
/// # Example
///
/// ```rust
/// use immutable::core::{deep_copy, Record, Value};
///
/// let original = Value::from(Record::new([("Count", 1)]));
/// let copy = deep_copy(&original);
///
/// assert_eq!(copy, original);
/// assert!(!copy.same_object(&original));
/// ```
pub fn deep_copy(value: &Value) -> Value {
    let mut copy = value.clone();
    clone_deep(&mut copy);
    copy
}

// One level only: objects held by the duplicate's own fields stay shared.
fn duplicate(object: &Arc<Record>) -> Arc<Record> {
    Arc::new(Record::clone(object))
}
