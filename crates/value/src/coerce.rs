//! Scripting-style coercions used by the evaluation functions.
//!
//! Candidate answers of the wrong type still get substituted and evaluated
//! so a verdict can show what the filled-in expression produces. These
//! helpers give every such evaluation a defined result, following the
//! loose-typing rules the drill teaches.

use serde_json::Value;

/// Numeric coercion.
///
/// Booleans count as 0/1, blank-ish strings as 0, numeric strings parse,
/// other strings are NaN. An array coerces through its joined text, so `[]`
/// is 0, `[7]` is 7, and a multi-element array is NaN. `null` stands for an
/// undefined result and is NaN.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::String(s) => {
            let t = s.trim();
            if t.is_empty() {
                0.0
            } else {
                t.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Value::Array(_) => {
            let joined = to_text_js(value);
            to_number(&Value::String(joined))
        }
        Value::Null | Value::Object(_) => f64::NAN,
    }
}

/// Textual coercion: strings are bare (no quotes), arrays join their
/// elements with commas, recursively.
pub fn to_text_js(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(to_text_js)
            .collect::<Vec<_>>()
            .join(","),
        Value::Null => "null".to_string(),
        Value::Object(_) => "[object]".to_string(),
    }
}

/// Truthiness. Zero, NaN, and the empty string are falsy; every array is
/// truthy, the empty one included.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => match n.as_f64() {
            Some(f) => f != 0.0 && !f.is_nan(),
            None => false,
        },
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
