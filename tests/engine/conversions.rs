//! Integration tests for the conversion protocol
//!
//! Exercises the full to-number/to-string/to-boolean tables, hook dispatch
//! priority, and the recursion bound.

use juggle_engine::{ConversionEngine, EngineLimits, to_boolean, to_number, to_string};
use juggle_foundation::{ConversionContext, Convertible, ErrorKind, JgMap, Value};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// To Number
// =============================================================================

#[test]
fn number_conversion_table() {
    assert_eq!(to_number(&Value::Null).unwrap(), 0.0);
    assert!(to_number(&Value::Undefined).unwrap().is_nan());
    assert_eq!(to_number(&Value::Bool(true)).unwrap(), 1.0);
    assert_eq!(to_number(&Value::Bool(false)).unwrap(), 0.0);
    assert_eq!(to_number(&Value::Number(1.5)).unwrap(), 1.5);
}

#[test]
fn number_from_strings() {
    assert_eq!(to_number(&Value::from("123")).unwrap(), 123.0);
    assert_eq!(to_number(&Value::from("123.45")).unwrap(), 123.45);
    assert_eq!(to_number(&Value::from("")).unwrap(), 0.0);
    assert_eq!(to_number(&Value::from("  ")).unwrap(), 0.0);
    assert_eq!(to_number(&Value::from("-1e2")).unwrap(), -100.0);
    assert_eq!(to_number(&Value::from("0x10")).unwrap(), 16.0);
    assert!(to_number(&Value::from("123abc")).unwrap().is_nan());
    assert!(to_number(&Value::from("abc")).unwrap().is_nan());
}

#[test]
fn number_sentinels_pass_through() {
    assert!(to_number(&Value::Number(f64::NAN)).unwrap().is_nan());
    assert_eq!(
        to_number(&Value::Number(f64::NEG_INFINITY)).unwrap(),
        f64::NEG_INFINITY
    );
}

#[test]
fn number_from_containers() {
    assert_eq!(to_number(&Value::list([])).unwrap(), 0.0);
    assert_eq!(to_number(&Value::list([Value::from("7")])).unwrap(), 7.0);
    assert!(
        to_number(&Value::list([Value::from(1), Value::from(2)]))
            .unwrap()
            .is_nan()
    );
    assert!(to_number(&Value::Map(JgMap::new())).unwrap().is_nan());
}

// =============================================================================
// To String
// =============================================================================

#[test]
fn string_conversion_table() {
    assert_eq!(&*to_string(&Value::Null).unwrap(), "null");
    assert_eq!(&*to_string(&Value::Undefined).unwrap(), "undefined");
    assert_eq!(&*to_string(&Value::Bool(true)).unwrap(), "true");
    assert_eq!(&*to_string(&Value::Bool(false)).unwrap(), "false");
    assert_eq!(&*to_string(&Value::from("hi")).unwrap(), "hi");
}

#[test]
fn string_number_rendering() {
    assert_eq!(&*to_string(&Value::Number(123.0)).unwrap(), "123");
    assert_eq!(&*to_string(&Value::Number(1.5)).unwrap(), "1.5");
    assert_eq!(&*to_string(&Value::Number(-0.0)).unwrap(), "0");
    assert_eq!(&*to_string(&Value::Number(f64::NAN)).unwrap(), "NaN");
    assert_eq!(
        &*to_string(&Value::Number(f64::INFINITY)).unwrap(),
        "Infinity"
    );
    assert_eq!(
        &*to_string(&Value::Number(f64::NEG_INFINITY)).unwrap(),
        "-Infinity"
    );
}

#[test]
fn string_list_joining() {
    let v = Value::list([Value::from(1), Value::from(2), Value::from(3)]);
    assert_eq!(&*to_string(&v).unwrap(), "1,2,3");
    assert_eq!(&*to_string(&Value::list([])).unwrap(), "");
}

#[test]
fn nullish_elements_vanish_inside_lists() {
    // The asymmetry: top-level null renders "null", but inside a list it
    // renders as empty string.
    let v = Value::list([Value::Null, Value::Undefined, Value::from(2)]);
    assert_eq!(&*to_string(&v).unwrap(), ",,2");
}

#[test]
fn map_renders_fixed_text() {
    let m = JgMap::new().insert("any", Value::from("thing"));
    assert_eq!(&*to_string(&Value::Map(m)).unwrap(), "[object Object]");
}

// =============================================================================
// To Boolean
// =============================================================================

#[test]
fn boolean_conversion_table() {
    assert!(!to_boolean(&Value::Null));
    assert!(!to_boolean(&Value::Undefined));
    assert!(!to_boolean(&Value::Bool(false)));
    assert!(!to_boolean(&Value::Number(0.0)));
    assert!(!to_boolean(&Value::Number(f64::NAN)));
    assert!(!to_boolean(&Value::from("")));

    assert!(to_boolean(&Value::from("false")));
    assert!(to_boolean(&Value::list([])));
    assert!(to_boolean(&Value::Map(JgMap::new())));
    assert!(to_boolean(&Value::Convertible(Convertible::new("any"))));
}

#[test]
fn boolean_conversion_is_idempotent() {
    for v in [Value::Null, Value::from("x"), Value::Number(0.0)] {
        let once = to_boolean(&v);
        assert_eq!(to_boolean(&Value::Bool(once)), once);
    }
}

// =============================================================================
// Hook Dispatch
// =============================================================================

#[test]
fn number_context_never_calls_display_hook() {
    let display_calls = Arc::new(AtomicUsize::new(0));
    let counter = display_calls.clone();
    let v = Value::Convertible(
        Convertible::new("probe")
            .with_display_text(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Value::from("ignored")
            })
            .with_numeric_value(|| Value::Number(5.0)),
    );

    assert_eq!(to_number(&v).unwrap(), 5.0);
    assert_eq!(display_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn string_context_never_calls_numeric_hook() {
    let numeric_calls = Arc::new(AtomicUsize::new(0));
    let counter = numeric_calls.clone();
    let v = Value::Convertible(
        Convertible::new("probe")
            .with_display_text(|| Value::from("shown"))
            .with_numeric_value(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Value::Number(0.0)
            }),
    );

    assert_eq!(&*to_string(&v).unwrap(), "shown");
    assert_eq!(numeric_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn context_hook_suppresses_the_other_two() {
    let plain_calls = Arc::new(AtomicUsize::new(0));
    let (c1, c2) = (plain_calls.clone(), plain_calls.clone());
    let v = Value::Convertible(
        Convertible::new("modern")
            .with_display_text(move || {
                c1.fetch_add(1, Ordering::SeqCst);
                Value::from("never")
            })
            .with_numeric_value(move || {
                c2.fetch_add(1, Ordering::SeqCst);
                Value::Number(-1.0)
            })
            .with_primitive_for_context(|ctx| match ctx {
                ConversionContext::String => Value::from("Value: 100"),
                _ => Value::Number(100.0),
            }),
    );

    assert_eq!(to_number(&v).unwrap(), 100.0);
    assert_eq!(&*to_string(&v).unwrap(), "Value: 100");
    assert_eq!(plain_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn fallback_skips_non_primitive_hook_results() {
    // A numeric hook returning a container falls through to display.
    let v = Value::Convertible(
        Convertible::new("tricky")
            .with_numeric_value(|| Value::Map(JgMap::new()))
            .with_display_text(|| Value::from("42")),
    );
    assert_eq!(to_number(&v).unwrap(), 42.0);
}

#[test]
fn display_hook_returning_number_still_works_for_string() {
    // The hook yields a primitive number; string conversion renders it.
    let v = Value::Convertible(
        Convertible::new("lazy").with_display_text(|| Value::Number(100.0)),
    );
    assert_eq!(&*to_string(&v).unwrap(), "100");
}

#[test]
fn hookless_convertible_fails_both_directions() {
    let v = Value::Convertible(Convertible::new("inert"));
    assert!(matches!(
        to_number(&v).unwrap_err().kind,
        ErrorKind::CannotConvert { .. }
    ));
    assert!(matches!(
        to_string(&v).unwrap_err().kind,
        ErrorKind::CannotConvert { .. }
    ));
    // Boolean conversion is total regardless.
    assert!(to_boolean(&v));
}

// =============================================================================
// Depth Limit
// =============================================================================

#[test]
fn depth_limit_cuts_off_deep_nesting() {
    let engine = ConversionEngine::with_limits(EngineLimits::with_max_depth(8));
    let mut v = Value::from("x");
    for _ in 0..64 {
        v = Value::list([v]);
    }
    let err = engine.to_string(&v).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DepthExceeded { limit: 8 }));
}

#[test]
fn default_limit_handles_reasonable_nesting() {
    let mut v = Value::from("deep");
    for _ in 0..16 {
        v = Value::list([v]);
    }
    assert_eq!(&*to_string(&v).unwrap(), "deep");
}
