//! Evaluation functions behind the operator table.
//!
//! Every function is total. Candidate answers of any type get substituted
//! and evaluated so a verdict can always show what the filled-in expression
//! produces, which means mistyped operands must coerce instead of failing.
//! The rules are the loose-typing rules the drill teaches; non-finite
//! numeric results collapse to `null`, the JSON image of `NaN` and
//! `Infinity`.

use blankout_value::{deep_equal, number_value, to_number, to_text_js, truthy, Value};

fn string_flavored(v: &Value) -> bool {
    matches!(v, Value::String(_) | Value::Array(_))
}

// ---------------------------------------------------------- arithmetic

/// `+`: concatenation when either side is a string or an array (arrays
/// flatten to their joined text first); numeric addition otherwise.
pub fn add(a: &Value, b: &Value) -> Value {
    if string_flavored(a) || string_flavored(b) {
        Value::from(format!("{}{}", to_text_js(a), to_text_js(b)))
    } else {
        number_value(to_number(a) + to_number(b))
    }
}

pub fn subtract(a: &Value, b: &Value) -> Value {
    number_value(to_number(a) - to_number(b))
}

pub fn multiply(a: &Value, b: &Value) -> Value {
    number_value(to_number(a) * to_number(b))
}

/// `/`: division by zero, like every other non-finite result, is `null`.
pub fn divide(a: &Value, b: &Value) -> Value {
    number_value(to_number(a) / to_number(b))
}

/// `%`: remainder carrying the dividend's sign.
pub fn modulo(a: &Value, b: &Value) -> Value {
    number_value(to_number(a) % to_number(b))
}

// ---------------------------------------------------------- comparison

fn both_strings<'a>(a: &'a Value, b: &'a Value) -> Option<(&'a str, &'a str)> {
    match (a, b) {
        (Value::String(x), Value::String(y)) => Some((x.as_str(), y.as_str())),
        _ => None,
    }
}

/// `<`: lexicographic when both sides are strings, numeric otherwise.
/// Numeric comparisons against NaN are false.
pub fn less(a: &Value, b: &Value) -> Value {
    Value::from(match both_strings(a, b) {
        Some((x, y)) => x < y,
        None => to_number(a) < to_number(b),
    })
}

pub fn less_equal(a: &Value, b: &Value) -> Value {
    Value::from(match both_strings(a, b) {
        Some((x, y)) => x <= y,
        None => to_number(a) <= to_number(b),
    })
}

pub fn greater(a: &Value, b: &Value) -> Value {
    Value::from(match both_strings(a, b) {
        Some((x, y)) => x > y,
        None => to_number(a) > to_number(b),
    })
}

pub fn greater_equal(a: &Value, b: &Value) -> Value {
    Value::from(match both_strings(a, b) {
        Some((x, y)) => x >= y,
        None => to_number(a) >= to_number(b),
    })
}

/// `===`: strict deep equality, the same equality the validator applies.
pub fn strict_eq(a: &Value, b: &Value) -> Value {
    Value::from(deep_equal(a, b))
}

pub fn strict_ne(a: &Value, b: &Value) -> Value {
    Value::from(!deep_equal(a, b))
}

// ------------------------------------------------------------- logical

/// `&&`: value-returning short circuit.
pub fn and(a: &Value, b: &Value) -> Value {
    if truthy(a) {
        b.clone()
    } else {
        a.clone()
    }
}

/// `||`: value-returning short circuit.
pub fn or(a: &Value, b: &Value) -> Value {
    if truthy(a) {
        a.clone()
    } else {
        b.clone()
    }
}

pub fn not(a: &Value) -> Value {
    Value::from(!truthy(a))
}

// ------------------------------------------------------------ indexing

/// `[]`: index into a string or an array.
///
/// String indexing yields a one-character string. Fractional, negative, or
/// out-of-range indices yield `null`, as does indexing a non-container.
/// An index given as a string works only in its canonical integer spelling.
pub fn index(container: &Value, idx: &Value) -> Value {
    let i = match index_of_value(idx) {
        Some(i) => i,
        None => return Value::Null,
    };
    match container {
        Value::String(s) => s
            .chars()
            .nth(i)
            .map(|c| Value::from(c.to_string()))
            .unwrap_or(Value::Null),
        Value::Array(items) => items.get(i).cloned().unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

fn index_of_value(idx: &Value) -> Option<usize> {
    match idx {
        Value::Number(n) => {
            let f = n.as_f64()?;
            if f.fract() == 0.0 && f >= 0.0 && f <= usize::MAX as f64 {
                Some(f as usize)
            } else {
                None
            }
        }
        Value::String(s) => {
            let i: usize = s.parse().ok()?;
            if i.to_string() == *s {
                Some(i)
            } else {
                None
            }
        }
        _ => None,
    }
}
