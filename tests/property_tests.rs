//! Property-based tests for the immutability helpers.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use immutable::core::{
    clone_deep, deep_copy, intercept_set, intercept_unset, resolve_field_name, Immutable, Record,
    Value, ViolationKind,
};
use proptest::prelude::*;

fn arbitrary_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e6..1.0e6f64).prop_map(Value::Float),
        "[a-z]{0,8}".prop_map(Value::String),
    ]
}

fn arbitrary_value() -> impl Strategy<Value = Value> {
    arbitrary_scalar().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::btree_map("[a-z]{1,4}", inner.clone(), 0..4).prop_map(Value::Map),
            prop::collection::btree_map("[A-Z][a-z]{0,4}", inner, 0..4)
                .prop_map(|fields| Value::from(fields.into_iter().collect::<Record>())),
        ]
    })
}

fn field_name() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,16}"
}

/// True when some object handle in `a` is the same allocation as the
/// corresponding one in `b`, looking through containers only.
fn shares_nested_object(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(_), Value::Object(_)) => a.same_object(b),
        (Value::List(xs), Value::List(ys)) => {
            xs.iter().zip(ys).any(|(x, y)| shares_nested_object(x, y))
        }
        (Value::Map(xs), Value::Map(ys)) => xs
            .iter()
            .any(|(k, x)| ys.get(k).is_some_and(|y| shares_nested_object(x, y))),
        _ => false,
    }
}

proptest! {
    #[test]
    fn resolve_strips_with_prefix(field in field_name()) {
        let mutator = format!("with{field}");
        prop_assert_eq!(resolve_field_name(&mutator), field.as_str());
    }

    #[test]
    fn resolve_is_deterministic(mutator in "\\PC{0,20}") {
        prop_assert_eq!(resolve_field_name(&mutator), resolve_field_name(&mutator));
    }

    #[test]
    fn with_never_mutates_original(
        field in field_name(),
        before in arbitrary_scalar(),
        after in arbitrary_value()
    ) {
        let original = Record::new([(field.clone(), before.clone())]);

        let updated = original.with(&format!("with{field}"), after.clone()).unwrap();

        prop_assert_eq!(updated.get(&field), Some(&after));
        prop_assert_eq!(original.get(&field), Some(&before));
    }

    #[test]
    fn with_keeps_other_fields(
        fields in prop::collection::btree_map(field_name(), arbitrary_scalar(), 2..6),
        value in arbitrary_scalar()
    ) {
        let original: Record = fields.clone().into_iter().collect();
        let target = fields.keys().next().unwrap().clone();

        let updated = original.with(&format!("with{target}"), value).unwrap();

        for (name, expected) in fields.iter().filter(|(name, _)| **name != target) {
            prop_assert_eq!(updated.get(name), Some(expected));
        }
    }

    #[test]
    fn clone_deep_preserves_contents(value in arbitrary_value()) {
        let mut copy = value.clone();
        clone_deep(&mut copy);
        prop_assert_eq!(&copy, &value);
    }

    #[test]
    fn clone_deep_shares_no_nested_object(value in arbitrary_value()) {
        let copy = deep_copy(&value);
        prop_assert!(!shares_nested_object(&value, &copy));
    }

    #[test]
    fn scalar_containers_pass_through(
        entries in prop::collection::btree_map("[a-z]{1,6}", arbitrary_scalar(), 0..8)
    ) {
        let original = Value::Map(entries);
        let copy = deep_copy(&original);
        prop_assert_eq!(copy, original);
    }

    #[test]
    fn guard_rejects_every_write(field in "\\PC{0,12}", value in arbitrary_value()) {
        let set = intercept_set(&field, value).unwrap_err();
        let unset = intercept_unset(&field).unwrap_err();

        prop_assert_eq!(set.kind, ViolationKind::Set);
        prop_assert_eq!(unset.kind, ViolationKind::Unset);
        prop_assert_ne!(set.code(), unset.code());
    }

    #[test]
    fn guarded_record_is_unchanged_after_rejection(
        fields in prop::collection::btree_map(field_name(), arbitrary_scalar(), 1..4),
        value in arbitrary_scalar()
    ) {
        let record: Record = fields.into_iter().collect();
        let before = record.clone();
        let target: Vec<String> = record.iter().map(|(name, _)| name.to_string()).collect();

        for name in &target {
            prop_assert!(record.set(name, value.clone()).is_err());
            prop_assert!(record.unset(name).is_err());
        }
        prop_assert_eq!(record, before);
    }
}
