//! Integration tests for loose and strict equality
//!
//! The classic coercion table, identity semantics for composites, and
//! failure propagation.

use juggle_engine::{loose_equals, strict_equals};
use juggle_foundation::{Convertible, JgMap, Value};

fn eq(a: &Value, b: &Value) -> bool {
    loose_equals(a, b).unwrap()
}

// =============================================================================
// Loose Equality
// =============================================================================

#[test]
fn null_equals_undefined_and_nothing_else() {
    assert!(eq(&Value::Null, &Value::Undefined));
    assert!(eq(&Value::Null, &Value::Null));
    assert!(eq(&Value::Undefined, &Value::Undefined));

    assert!(!eq(&Value::Null, &Value::Number(0.0)));
    assert!(!eq(&Value::Null, &Value::from("")));
    assert!(!eq(&Value::Null, &Value::Bool(false)));
    assert!(!eq(&Value::Undefined, &Value::Number(f64::NAN)));
}

#[test]
fn number_and_numeric_string_are_loosely_equal() {
    assert!(eq(&Value::Number(1.0), &Value::from("1")));
    assert!(!eq(&Value::Number(1.0), &Value::from("1.1")));
    assert!(eq(&Value::Number(100.0), &Value::from(" 100 ")));
}

#[test]
fn booleans_coerce_to_numbers() {
    assert!(eq(&Value::Bool(true), &Value::Number(1.0)));
    assert!(eq(&Value::Bool(false), &Value::Number(0.0)));
    assert!(eq(&Value::Bool(true), &Value::from("1")));
    // "true" does not parse numerically, so this is false.
    assert!(!eq(&Value::Bool(true), &Value::from("true")));
}

#[test]
fn nan_is_not_equal_to_itself() {
    let nan = Value::Number(f64::NAN);
    assert!(!eq(&nan, &nan));
    // The only value unequal to itself: the standard NaN check.
    assert!(!eq(&nan, &nan.clone()));
}

#[test]
fn composites_resolve_before_comparison() {
    // [] -> "" -> 0
    assert!(eq(&Value::list([]), &Value::Number(0.0)));
    assert!(eq(&Value::list([]), &Value::from("")));
    assert!(eq(&Value::list([]), &Value::Bool(false)));
    // [1] -> "1" -> 1
    assert!(eq(&Value::list([Value::from(1)]), &Value::Number(1.0)));
    // A map renders to "[object Object]", which never parses numerically.
    assert!(!eq(&Value::Map(JgMap::new()), &Value::Number(0.0)));
}

#[test]
fn same_kind_composites_compare_by_identity() {
    let a = Value::list([Value::from(1)]);
    let b = a.clone();
    let c = Value::list([Value::from(1)]);

    assert!(eq(&a, &b));
    assert!(!eq(&a, &c));

    let m1 = Value::Map(JgMap::new());
    let m2 = m1.clone();
    assert!(eq(&m1, &m2));
    assert!(!eq(&m1, &Value::Map(JgMap::new())));
}

#[test]
fn convertible_resolves_through_default_context() {
    let v = Value::Convertible(
        Convertible::new("mystery")
            .with_display_text(|| Value::from("1"))
            .with_numeric_value(|| Value::Number(2.0)),
    );
    // Default context prefers the numeric hook: it resolves to 2.
    assert!(!eq(&v, &Value::Number(1.0)));
    assert!(eq(&v, &Value::Number(2.0)));
}

#[test]
fn resolution_failure_propagates() {
    let inert = Value::Convertible(Convertible::new("inert"));
    assert!(loose_equals(&inert, &Value::Number(1.0)).is_err());
    // Same-kind identity comparison needs no resolution.
    assert!(loose_equals(&inert, &inert).unwrap());
}

// =============================================================================
// Strict Equality
// =============================================================================

#[test]
fn strict_never_coerces() {
    assert!(!strict_equals(&Value::Number(1.0), &Value::from("1")));
    assert!(!strict_equals(&Value::Null, &Value::Undefined));
    assert!(!strict_equals(&Value::Bool(false), &Value::Number(0.0)));
}

#[test]
fn strict_same_kind_comparisons() {
    assert!(strict_equals(&Value::Number(1.0), &Value::Number(1.0)));
    assert!(strict_equals(&Value::Number(0.0), &Value::Number(-0.0)));
    assert!(!strict_equals(
        &Value::Number(f64::NAN),
        &Value::Number(f64::NAN)
    ));
    assert!(strict_equals(&Value::from("a"), &Value::from("a")));
    assert!(strict_equals(&Value::Null, &Value::Null));
}

#[test]
fn strict_composites_by_identity() {
    let a = Value::list([Value::from(1)]);
    assert!(strict_equals(&a, &a.clone()));
    assert!(!strict_equals(&a, &Value::list([Value::from(1)])));

    let c = Convertible::new("c");
    let v1 = Value::Convertible(c.clone());
    let v2 = Value::Convertible(c);
    assert!(strict_equals(&v1, &v2));
}

#[test]
fn strict_agreement_implies_loose_agreement() {
    let samples = [
        Value::Null,
        Value::Undefined,
        Value::Bool(true),
        Value::Number(3.0),
        Value::from("3"),
    ];
    for a in &samples {
        for b in &samples {
            if strict_equals(a, b) {
                assert!(loose_equals(a, b).unwrap(), "{a:?} === {b:?} but not ==");
            }
        }
    }
}
