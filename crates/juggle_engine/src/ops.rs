//! Coercion-aware operators.
//!
//! The conversion protocol is deliberately exposed as explicit functions
//! rather than operator overloads: arithmetic layered on values must spell
//! out its coercions. Addition is the one string-aware operator; the rest
//! coerce both sides to numbers, and the NaN sentinel propagates through
//! every arithmetic path.

use juggle_foundation::{ConversionContext, Result, Type, Value};

use crate::convert::ConversionEngine;

impl ConversionEngine {
    /// Adds two values.
    ///
    /// Both sides resolve to primitives with no context preference; if
    /// either is then a string, the result is their concatenation,
    /// otherwise their numeric sum.
    ///
    /// # Errors
    ///
    /// Fails when either side cannot resolve to a primitive.
    pub fn add(&self, a: &Value, b: &Value) -> Result<Value> {
        let pa = self.resolve_to_primitive(a, ConversionContext::Default)?;
        let pb = self.resolve_to_primitive(b, ConversionContext::Default)?;
        if pa.value_type() == Type::String || pb.value_type() == Type::String {
            let mut out = String::new();
            out.push_str(&self.to_string(&pa)?);
            out.push_str(&self.to_string(&pb)?);
            Ok(Value::String(out.into()))
        } else {
            Ok(Value::Number(self.to_number(&pa)? + self.to_number(&pb)?))
        }
    }

    /// Subtracts `b` from `a` under numeric coercion.
    ///
    /// # Errors
    ///
    /// Fails when either side cannot resolve to a primitive.
    pub fn subtract(&self, a: &Value, b: &Value) -> Result<f64> {
        Ok(self.to_number(a)? - self.to_number(b)?)
    }

    /// Multiplies two values under numeric coercion.
    ///
    /// # Errors
    ///
    /// Fails when either side cannot resolve to a primitive.
    pub fn multiply(&self, a: &Value, b: &Value) -> Result<f64> {
        Ok(self.to_number(a)? * self.to_number(b)?)
    }

    /// Divides `a` by `b` under numeric coercion.
    ///
    /// Division by zero follows IEEE: ±infinity, or NaN for zero over zero.
    ///
    /// # Errors
    ///
    /// Fails when either side cannot resolve to a primitive.
    pub fn divide(&self, a: &Value, b: &Value) -> Result<f64> {
        Ok(self.to_number(a)? / self.to_number(b)?)
    }

    /// Remainder of `a` over `b` under numeric coercion.
    ///
    /// Takes the sign of the dividend.
    ///
    /// # Errors
    ///
    /// Fails when either side cannot resolve to a primitive.
    pub fn remainder(&self, a: &Value, b: &Value) -> Result<f64> {
        Ok(self.to_number(a)? % self.to_number(b)?)
    }

    /// Unary plus: numeric coercion by another name.
    ///
    /// # Errors
    ///
    /// Fails when the value cannot resolve to a primitive.
    pub fn unary_plus(&self, value: &Value) -> Result<f64> {
        self.to_number(value)
    }

    /// Numeric negation.
    ///
    /// # Errors
    ///
    /// Fails when the value cannot resolve to a primitive.
    pub fn negate(&self, value: &Value) -> Result<f64> {
        Ok(-self.to_number(value)?)
    }

    /// Selects `a` if it is falsy, else `b`.
    ///
    /// Returns the operand itself, not its boolean conversion.
    #[must_use]
    pub fn logical_and(&self, a: &Value, b: &Value) -> Value {
        if self.to_boolean(a) {
            b.clone()
        } else {
            a.clone()
        }
    }

    /// Selects `a` if it is truthy, else `b`.
    ///
    /// Returns the operand itself, not its boolean conversion. Handy for
    /// defaulting: `logical_or(&input, &fallback)`.
    #[must_use]
    pub fn logical_or(&self, a: &Value, b: &Value) -> Value {
        if self.to_boolean(a) {
            a.clone()
        } else {
            b.clone()
        }
    }

    /// Boolean negation of a value's truthiness.
    #[must_use]
    pub fn logical_not(&self, value: &Value) -> bool {
        !self.to_boolean(value)
    }

    /// Converts a value to an integer by truncation.
    ///
    /// The NaN sentinel becomes 0; infinities clamp to the i64 bounds.
    ///
    /// # Errors
    ///
    /// Fails when the value cannot resolve to a primitive.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_integer(&self, value: &Value) -> Result<i64> {
        let n = self.to_number(value)?;
        if n.is_nan() {
            return Ok(0);
        }
        // Float-to-int casts saturate, which is exactly the clamp we want.
        Ok(n.trunc() as i64)
    }
}
