//! Canonical textual encoding of values.
//!
//! The canonical form is compact JSON. Answer tiles display it and
//! distinct-value generation is keyed on it, so `from_text(&to_text(v))`
//! must reproduce `v` exactly for every classifiable value.

use crate::error::ValueError;
use serde_json::Value;

/// Serializes a value to its canonical text.
pub fn to_text(value: &Value) -> String {
    value.to_string()
}

/// Parses canonical text back into a value.
///
/// Rejects text for values outside the four question types; `null` and
/// objects never enter the engine.
pub fn from_text(text: &str) -> Result<Value, ValueError> {
    let value: Value =
        serde_json::from_str(text).map_err(|_| ValueError::Parse(text.to_string()))?;
    ensure_classifiable(&value)?;
    Ok(value)
}

/// Checks that a value, and every array element recursively, is one of the
/// four question types.
pub fn ensure_classifiable(value: &Value) -> Result<(), ValueError> {
    match value {
        Value::Array(items) => {
            for item in items {
                ensure_classifiable(item)?;
            }
            Ok(())
        }
        Value::Null | Value::Object(_) => Err(ValueError::Unclassifiable(to_text(value))),
        _ => Ok(()),
    }
}

/// Canonical number value for an evaluation result.
///
/// Integral magnitudes inside the exact-f64 range become integer numbers,
/// matching what the generator emits, so `6 / 2` equals a generated `3`
/// textually as well as numerically. Non-finite results collapse to `null`,
/// the JSON image of `NaN` and `Infinity`.
pub fn number_value(n: f64) -> Value {
    if !n.is_finite() {
        return Value::Null;
    }
    const EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
    if n.fract() == 0.0 && n.abs() <= EXACT {
        return Value::from(n as i64);
    }
    match serde_json::Number::from_f64(n) {
        Some(num) => Value::Number(num),
        None => Value::Null,
    }
}
