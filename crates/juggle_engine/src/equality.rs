//! Loose and strict equality.
//!
//! Strict equality never coerces: different kinds are simply unequal.
//! Loose equality follows the conversion protocol: null and undefined
//! equal each other and nothing else, and mixed primitive kinds are
//! coerced toward numbers and retried. Containers and convertibles
//! compare by identity in both relations; structural comparison is
//! deliberately not provided.

use juggle_foundation::{ConversionContext, Error, Result, Value};

use crate::convert::ConversionEngine;
use crate::number::numeric_value_of;

impl ConversionEngine {
    /// Compares two values without coercion.
    ///
    /// NaN is unequal to itself and zero equals negative zero, per IEEE.
    #[must_use]
    pub fn strict_equals(&self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Null, Value::Null) | (Value::Undefined, Value::Undefined) => true,
            (Value::Bool(x), Value::Bool(y)) => x == y,
            (Value::Number(x), Value::Number(y)) => x == y,
            (Value::String(x), Value::String(y)) => x == y,
            (Value::List(x), Value::List(y)) => x.ptr_eq(y),
            (Value::Map(x), Value::Map(y)) => x.ptr_eq(y),
            (Value::Convertible(x), Value::Convertible(y)) => x.same_identity(y),
            _ => false,
        }
    }

    /// Compares two values with coercion.
    ///
    /// # Errors
    ///
    /// Fails when resolving a container or convertible to a primitive
    /// fails; the comparison itself cannot fail.
    pub fn loose_equals(&self, a: &Value, b: &Value) -> Result<bool> {
        self.loose_impl(a, b, 0)
    }

    fn loose_impl(&self, a: &Value, b: &Value, depth: u32) -> Result<bool> {
        if depth >= self.limits().max_depth {
            return Err(Error::depth_exceeded(self.limits().max_depth));
        }

        // Same kind: compare by value (identity for composites).
        if a.value_type() == b.value_type() {
            return Ok(self.strict_equals(a, b));
        }

        // Null equals undefined and nothing else.
        if a.is_nullish() || b.is_nullish() {
            return Ok(a.is_nullish() && b.is_nullish());
        }

        // Composites resolve to primitives before comparison.
        if !a.is_primitive() {
            let pa = self.resolve_to_primitive(a, ConversionContext::Default)?;
            return self.loose_impl(&pa, b, depth + 1);
        }
        if !b.is_primitive() {
            let pb = self.resolve_to_primitive(b, ConversionContext::Default)?;
            return self.loose_impl(a, &pb, depth + 1);
        }

        // Mixed primitive kinds: coerce the non-numeric side toward number
        // and retry.
        match (a, b) {
            (Value::Bool(x), _) => {
                let n = Value::Number(if *x { 1.0 } else { 0.0 });
                self.loose_impl(&n, b, depth + 1)
            }
            (_, Value::Bool(y)) => {
                let n = Value::Number(if *y { 1.0 } else { 0.0 });
                self.loose_impl(a, &n, depth + 1)
            }
            (Value::Number(_), Value::String(s)) => {
                let n = Value::Number(numeric_value_of(s));
                self.loose_impl(a, &n, depth + 1)
            }
            (Value::String(s), Value::Number(_)) => {
                let n = Value::Number(numeric_value_of(s));
                self.loose_impl(&n, b, depth + 1)
            }
            _ => Ok(false),
        }
    }
}

/// Loose equality with a default-configured engine.
///
/// # Errors
///
/// See [`ConversionEngine::loose_equals`].
pub fn loose_equals(a: &Value, b: &Value) -> Result<bool> {
    ConversionEngine::new().loose_equals(a, b)
}

/// Strict equality with a default-configured engine.
#[must_use]
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    ConversionEngine::new().strict_equals(a, b)
}
