//! Strict equality over runtime values.

use serde_json::Value;

/// Strict deep equality.
///
/// Numbers compare numerically, so an integer `5` equals a float `5.0`.
/// Arrays compare elementwise. Everything else compares structurally with
/// no cross-type coercion. Both the `===`/`!==` operators and the answer
/// validator go through this one function, so the equality a learner is
/// drilled on and the equality their answer is judged by cannot diverge.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(fx), Some(fy)) => fx == fy,
            _ => x == y,
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| deep_equal(x, y))
        }
        _ => a == b,
    }
}
