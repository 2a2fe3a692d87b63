//! Core immutability helpers.
//!
//! This module contains the whole capability in two forms:
//! - free functions (`resolve_field_name`, `with_field`, `clone_deep`, the
//!   guard interceptors) usable from any caller
//! - the [`Immutable`] trait, which mixes the same behavior into an owning
//!   type and adds the access guard
//!
//! Both forms share identical semantics and hold no state of their own.

mod clone;
mod error;
mod guard;
mod immutable;
mod name;
mod record;
mod value;
mod with;

pub use clone::{clone_deep, clone_deep_list, clone_deep_map, deep_copy};
pub use error::{ImmutableError, ImmutableResult};
pub use guard::{
    intercept_set, intercept_unset, ViolationKind, WriteViolation, SET_VIOLATION_CODE,
    UNSET_VIOLATION_CODE,
};
pub use immutable::Immutable;
pub use name::{resolve_field_name, MUTATOR_PREFIX_LEN};
pub use record::Record;
pub use value::{FromValue, Value};
pub use with::{convert_field, with_field, without_field, Fields};
