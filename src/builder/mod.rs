//! Builder API for immutable value objects.
//!
//! `RecordBuilder` constructs dynamic records with a checked field set;
//! the `immutable!` macro generates statically typed value objects with
//! private fields and copy-returning `with` methods.

pub mod error;
pub mod macros;
pub mod record;

pub use error::BuildError;
pub use record::RecordBuilder;
