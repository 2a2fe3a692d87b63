//! Immutable: copy-on-write value objects
//!
//! Value objects built with this crate never change in place. Every change
//! is requested through a `with<Field>` / `without<Field>` mutator and
//! returns a modified copy; the receiver stays valid and untouched.
//!
//! # Core Concepts
//!
//! - **Name resolution**: mutator names map to field names by dropping the
//!   four-character prefix
//! - **With-engine**: clone the owner, set one field on the clone
//! - **Recursive cloning**: replace nested objects inside containers with
//!   independent duplicates
//! - **Access guard**: direct writes and removals are always rejected
//!
//! # Example
//!
//! ```rust
//! use immutable::core::{clone_deep, Immutable, Record, Value};
//!
//! let a = Value::from(Record::new([("Name", "a")]));
//! let b = Value::from(Record::new([("Name", "b")]));
//! let list = Record::new([("Items", Value::List(vec![a.clone(), b]))]);
//!
//! let mut items = list.get("Items").cloned().unwrap();
//! clone_deep(&mut items);
//! let copy = list.with("withItems", items).unwrap();
//!
//! let copied = copy.get("Items").and_then(Value::as_list).unwrap();
//! assert_eq!(copied[0], a);
//! assert!(!copied[0].same_object(&a));
//! assert!(list.set("Items", Value::Null).is_err());
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::builder::RecordBuilder;
pub use crate::core::{Fields, Immutable, ImmutableError, Record, Value, ViolationKind};
