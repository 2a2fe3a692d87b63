//! Macros for declaring immutable value objects.

/// Declare a struct whose fields can only change through copy-returning
/// `with` methods.
///
/// Each field lists the name of its typed mutator after `=>`. The macro
/// generates:
/// - the struct, with private fields
/// - `new`, taking every field in declaration order
/// - a borrowing getter per field, named after the field
/// - the typed mutator, which returns a modified copy
/// - [`Fields`](crate::core::Fields) and [`Immutable`](crate::core::Immutable)
///   impls, addressing fields by their declared name
///
/// Named mutators resolve to the Rust field name exactly as written, so a
/// field `count` is reached with `"withcount"`, not `"withCount"`.
///
/// Field types must convert to and from [`Value`](crate::core::Value).
///
/// # Example
///
/// ```
/// use immutable::core::{Immutable, Value};
/// use immutable::immutable;
///
/// immutable! {
///     pub struct Counter {
///         count: i64 => with_count,
///         label: Option<String> => with_label,
///     }
/// }
///
/// let counter = Counter::new(5, None);
/// let bumped = counter.with_count(10);
/// assert_eq!(*bumped.count(), 10);
/// assert_eq!(*counter.count(), 5);
///
/// let labelled = counter.with("withlabel", "visits").unwrap();
/// assert_eq!(labelled.label().as_deref(), Some("visits"));
/// ```
///
/// Fields are private, so writing one from outside the declaring module does
/// not compile:
///
/// ```compile_fail
/// mod model {
///     immutable::immutable! {
///         pub struct Counter {
///             count: i64 => with_count,
///         }
///     }
/// }
///
/// let mut counter = model::Counter::new(1);
/// counter.count = 2;
/// ```
#[macro_export]
macro_rules! immutable {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty => $with:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field: $ty
            ),*
        }

        impl $name {
            #[allow(clippy::too_many_arguments)]
            pub fn new($($field: $ty),*) -> Self {
                Self { $($field),* }
            }

            $(
                pub fn $field(&self) -> &$ty {
                    &self.$field
                }

                pub fn $with(&self, value: $ty) -> Self {
                    let mut next = self.clone();
                    next.$field = value;
                    next
                }
            )*
        }

        impl $crate::core::Fields for $name {
            fn field_names(&self) -> Vec<&str> {
                vec![$(stringify!($field)),*]
            }

            #[allow(unused_variables)]
            fn field(&self, name: &str) -> Option<$crate::core::Value> {
                $(
                    if name == stringify!($field) {
                        return Some($crate::core::Value::from(self.$field.clone()));
                    }
                )*
                None
            }

            #[allow(unused_mut, unused_variables)]
            fn put_field(
                mut self,
                name: &str,
                value: $crate::core::Value,
            ) -> $crate::core::ImmutableResult<Self> {
                $(
                    if name == stringify!($field) {
                        self.$field = $crate::core::convert_field(name, value)?;
                        return Ok(self);
                    }
                )*
                Err($crate::core::ImmutableError::unknown_field(name))
            }
        }

        impl $crate::core::Immutable for $name {}
    };
}
