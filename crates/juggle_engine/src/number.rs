//! Numeric literal parsing and canonical number rendering.
//!
//! Parsing accepts exactly the literals the conversion protocol recognizes:
//! optionally signed decimal numbers with fraction and exponent, unsigned
//! `0x`/`0X` hexadecimal integers, and the `Infinity` spellings. Anything
//! else yields the NaN sentinel at the coercion layer.

/// Coerces string content to a number.
///
/// Leading and trailing whitespace is ignored; an empty or all-whitespace
/// string is zero; a string that is not entirely a numeric literal is the
/// NaN sentinel.
#[must_use]
pub fn numeric_value_of(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    parse_numeric_literal(trimmed).unwrap_or(f64::NAN)
}

/// Parses a complete string as a numeric literal.
///
/// The entire input must form the literal; no leading or trailing garbage
/// is tolerated. Returns `None` when the input is not a literal.
#[must_use]
pub fn parse_numeric_literal(s: &str) -> Option<f64> {
    // Hex integers take no sign and no fraction.
    if let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return parse_hex(digits);
    }
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    if is_decimal_literal(s) {
        s.parse().ok()
    } else {
        None
    }
}

/// Renders a number in canonical decimal form.
///
/// The NaN sentinel renders as `"NaN"`, infinities as `"Infinity"` and
/// `"-Infinity"`, negative zero as `"0"`, and integral values without a
/// fractional part.
#[must_use]
pub fn render_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers negative zero.
        return "0".to_string();
    }
    if n.fract() == 0.0 {
        format!("{n:.0}")
    } else {
        format!("{n}")
    }
}

fn parse_hex(digits: &str) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    // Folded digit by digit so arbitrarily long literals degrade to
    // infinity instead of failing an integer parse.
    let mut acc = 0.0_f64;
    for c in digits.chars() {
        let digit = c.to_digit(16)?;
        acc = acc * 16.0 + f64::from(digit);
    }
    Some(acc)
}

// Grammar: [+-]? (digits ['.' digits?] | '.' digits) ([eE] [+-]? digits)?
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let mut int_digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        int_digits += 1;
    }

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            frac_digits += 1;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let mut exp_digits = 0;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            exp_digits += 1;
        }
        if exp_digits == 0 {
            return false;
        }
    }

    i == bytes.len()
}
