//! Mutator-name to field-name resolution.
//!
//! Mutators follow the `with<Field>` / `without<Field>` naming convention.
//! Resolution strips the leading four characters and nothing else.

/// Length, in characters, of the prefix removed from every mutator name.
pub const MUTATOR_PREFIX_LEN: usize = 4;

/// Derive the target field name from a mutator name.
///
/// The first four characters are removed, for both `with...` and
/// `without...` names. `"withoutFoo"` therefore resolves to `"outFoo"`.
/// Names shorter than four characters resolve to an empty string.
///
/// # Example
///
/// ```rust
/// use immutable::core::resolve_field_name;
///
/// assert_eq!(resolve_field_name("withCount"), "Count");
/// assert_eq!(resolve_field_name("withoutCount"), "outCount");
/// assert_eq!(resolve_field_name("wit"), "");
/// ```
pub fn resolve_field_name(mutator: &str) -> &str {
    match mutator.char_indices().nth(MUTATOR_PREFIX_LEN) {
        Some((offset, _)) => &mutator[offset..],
        None => "",
    }
}
