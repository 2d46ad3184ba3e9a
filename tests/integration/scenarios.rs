//! End-to-end conversion scenarios
//!
//! Full-protocol walks: a hook-bearing value flowing through arithmetic
//! and display, defaulting patterns, and the documented conversion table.

use juggle_engine::{ConversionEngine, loose_equals, strict_equals, to_number, to_string};
use juggle_foundation::{Convertible, JgMap, Value};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn hooked_value_through_arithmetic_and_display() {
    // A value of 10 whose display text is deliberately not its number:
    // arithmetic must see 10, display must see the text, and the two
    // hooks must never leak into each other's context.
    let display_calls = Arc::new(AtomicUsize::new(0));
    let numeric_calls = Arc::new(AtomicUsize::new(0));
    let (dc, nc) = (display_calls.clone(), numeric_calls.clone());

    let v = Value::Convertible(
        Convertible::new("conversion-example")
            .with_display_text(move || {
                dc.fetch_add(1, Ordering::SeqCst);
                Value::from("fourty-two")
            })
            .with_numeric_value(move || {
                nc.fetch_add(1, Ordering::SeqCst);
                Value::Number(10.0)
            }),
    );

    let engine = ConversionEngine::new();
    let sum = engine.add(&v, &Value::Number(8.0)).unwrap();
    assert_eq!(sum.as_number(), Some(18.0));
    assert_eq!(display_calls.load(Ordering::SeqCst), 0);

    assert_eq!(&*engine.to_string(&v).unwrap(), "fourty-two");
    assert_eq!(numeric_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn form_input_normalization() {
    // Numeric fields default to 0 when unparseable; empty input becomes
    // the null marker rather than a number.
    let engine = ConversionEngine::new();
    let normalize = |input: &str| -> Value {
        if input.is_empty() {
            return Value::Null;
        }
        let n = engine.to_number(&Value::from(input)).unwrap();
        engine.logical_or(&Value::Number(n), &Value::Number(0.0))
    };

    assert_eq!(normalize("42"), Value::Number(42.0));
    assert_eq!(normalize(""), Value::Null);
    // NaN is falsy, so the default kicks in.
    assert_eq!(normalize("not a number"), Value::Number(0.0));
}

#[test]
fn documented_conversion_table() {
    // The summary table, spelled out as assertions.
    assert_eq!(to_number(&Value::from("")).unwrap(), 0.0);
    assert!(to_number(&Value::from("123abc")).unwrap().is_nan());
    assert_eq!(to_number(&Value::Null).unwrap(), 0.0);
    assert!(to_number(&Value::Undefined).unwrap().is_nan());
    assert_eq!(to_number(&Value::Bool(true)).unwrap(), 1.0);
    assert_eq!(to_number(&Value::Bool(false)).unwrap(), 0.0);
    assert_eq!(to_number(&Value::from("123.45")).unwrap(), 123.45);

    assert_eq!(&*to_string(&Value::Null).unwrap(), "null");
    assert_eq!(&*to_string(&Value::Undefined).unwrap(), "undefined");
    assert_eq!(&*to_string(&Value::Number(123.0)).unwrap(), "123");
    assert_eq!(&*to_string(&Value::Bool(true)).unwrap(), "true");
    assert_eq!(
        &*to_string(&Value::list([Value::from(1), Value::from(2), Value::from(3)]))
            .unwrap(),
        "1,2,3"
    );
    assert_eq!(
        &*to_string(&Value::Map(JgMap::new())).unwrap(),
        "[object Object]"
    );
}

#[test]
fn equality_operators_disagree_exactly_where_documented() {
    let one = Value::Number(1.0);
    let one_str = Value::from("1");

    assert!(loose_equals(&one, &one_str).unwrap());
    assert!(!strict_equals(&one, &one_str));
}

#[test]
fn the_only_self_unequal_value_is_nan() {
    // The standard NaN detection idiom relies on this.
    let engine = ConversionEngine::new();
    let candidates = [
        Value::Null,
        Value::Undefined,
        Value::Bool(false),
        Value::Number(0.0),
        Value::Number(f64::NAN),
        Value::from(""),
        Value::from("x"),
    ];
    for v in &candidates {
        let self_equal = engine.loose_equals(v, v).unwrap();
        let is_nan = matches!(v, Value::Number(n) if n.is_nan());
        assert_eq!(self_equal, !is_nan, "{v:?}");
    }
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = Arc::new(ConversionEngine::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                let v = Value::from(format!("{i}"));
                engine.to_number(&v).unwrap()
            })
        })
        .collect();
    let mut results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    results.sort_by(f64::total_cmp);
    assert_eq!(results, vec![0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn hooks_shared_across_threads() {
    // Convertible hooks are Send + Sync; conversions of the same value can
    // run concurrently.
    let v = Value::Convertible(
        Convertible::new("shared").with_numeric_value(|| Value::Number(5.0)),
    );
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let v = v.clone();
            std::thread::spawn(move || to_number(&v).unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 5.0);
    }
}
