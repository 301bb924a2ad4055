//! Building strategies: how an operator wraps a blank value into a
//! well-posed expression.
//!
//! Every strategy keeps the self-answer invariant: substituting the
//! original blank value back into the built expression reproduces the
//! expected value. Division and modulus additionally keep the original
//! expression away from degenerate arithmetic, and indexing prefers
//! questions whose answer is an element rather than a miss.

use crate::error::ExprError;
use crate::expr::{BinaryFn, Expr};
use crate::registry::{BuildStrategy, OperatorDef};
use blankout_random::{Generator, Side};
use blankout_value::{classify, number_value, to_number, Value};

/// Longest string container synthesized for a number-blank index question.
const MAX_CONTAINER: i64 = 32;

/// Builds the operator's expression around `blank`.
pub fn build(
    def: &'static OperatorDef,
    gen: &mut Generator,
    blank: Value,
) -> Result<Expr, ExprError> {
    match def.strategy {
        BuildStrategy::SameType(f) => {
            let companion = gen.of_type(classify(&blank))?;
            let side = gen.pick_side();
            Ok(place(def, f, side, blank, companion))
        }
        BuildStrategy::Numeric(f) => {
            let companion = Value::from(gen.number());
            let side = gen.pick_side();
            Ok(place(def, f, side, blank, companion))
        }
        BuildStrategy::Boolean(f) => {
            let companion = Value::from(gen.boolean());
            let side = gen.pick_side();
            Ok(place(def, f, side, blank, companion))
        }
        BuildStrategy::AnyType(f) => {
            let companion = gen.any_value()?;
            let side = gen.pick_side();
            Ok(place(def, f, side, blank, companion))
        }
        BuildStrategy::Prefix(f) => Ok(Expr::Unary {
            symbol: def.symbol,
            eval: f,
            accept: (def.accepts)(classify(&blank)),
            operand: Box::new(Expr::Blank(blank)),
        }),
        BuildStrategy::Division(f) => division(def, f, gen, blank),
        BuildStrategy::Modulus(f) => modulus(def, f, gen, blank),
        BuildStrategy::Index(f) => index(def, f, gen, blank),
    }
}

/// Assembles a binary node with the blank on the given side. The acceptable
/// answer types are fixed here, from the companion, for the life of the
/// question.
fn place(def: &'static OperatorDef, f: BinaryFn, side: Side, blank: Value, companion: Value) -> Expr {
    let accept = (def.accepts)(classify(&companion));
    let (lhs, rhs) = match side {
        Side::Left => (Expr::Blank(blank), Expr::Literal(companion)),
        Side::Right => (Expr::Literal(companion), Expr::Blank(blank)),
    };
    Expr::Binary {
        symbol: def.symbol,
        eval: f,
        accept,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

/// `/` placement. The divisor is never zero, and whenever the blank divides
/// evenly by something the quotient stays exact: a zero blank divides a
/// non-zero companion, a blank of one takes a small divisor, a blank with
/// integer factors takes one of them, and anything left becomes the divisor
/// of a scaled-up dividend.
fn division(
    def: &'static OperatorDef,
    f: BinaryFn,
    gen: &mut Generator,
    blank: Value,
) -> Result<Expr, ExprError> {
    let b = to_number(&blank);
    if b == 0.0 {
        let divisor = Value::from(gen.non_zero_int());
        return Ok(place(def, f, Side::Left, blank, divisor));
    }
    if b == 1.0 {
        let divisor = Value::from(gen.choice(&[2i64, 3, 4])?);
        return Ok(place(def, f, Side::Left, blank, divisor));
    }
    let divisors = factors_over_one(b);
    if !divisors.is_empty() {
        let divisor = Value::from(gen.choice(&divisors)?);
        return Ok(place(def, f, Side::Left, blank, divisor));
    }
    let scale = gen.choice(&[2i64, 3])?;
    let dividend = number_value(b * scale as f64);
    Ok(place(def, f, Side::Right, blank, dividend))
}

/// Integer factors of `|n|` greater than one, when `n` is a modest non-zero
/// integer. `|n|` itself is included, so any integer of magnitude two or
/// more has at least one.
fn factors_over_one(n: f64) -> Vec<i64> {
    if n.fract() != 0.0 || n.abs() < 2.0 || n.abs() > 1_000_000.0 {
        return Vec::new();
    }
    let m = n.abs() as i64;
    (2..=m).filter(|d| m % d == 0).collect()
}

/// `%` placement. The companion is never zero, and a blank below two stays
/// on the dividend side: as a divisor it would make the original expression
/// `x % 0` or the trivial `x % 1`.
fn modulus(
    def: &'static OperatorDef,
    f: BinaryFn,
    gen: &mut Generator,
    blank: Value,
) -> Result<Expr, ExprError> {
    let companion = Value::from(gen.non_zero_int());
    let side = if to_number(&blank) < 2.0 {
        Side::Left
    } else {
        gen.pick_side()
    };
    Ok(place(def, f, side, blank, companion))
}

/// `[]` placement. A container blank is indexed in range, with index 0 for
/// an empty container (the expected value is then `null`). A number blank
/// becomes the index of a synthesized string, sized so a small non-negative
/// blank lands in range; other number blanks get an arbitrary container and
/// a `null` expectation.
fn index(
    def: &'static OperatorDef,
    f: BinaryFn,
    gen: &mut Generator,
    blank: Value,
) -> Result<Expr, ExprError> {
    match &blank {
        Value::String(s) => {
            let i = in_range_index(gen, s.chars().count());
            Ok(place(def, f, Side::Left, blank, Value::from(i)))
        }
        Value::Array(items) => {
            let i = in_range_index(gen, items.len());
            Ok(place(def, f, Side::Left, blank, Value::from(i)))
        }
        _ => {
            let wanted = to_number(&blank);
            let len = if wanted >= 0.0 && wanted < MAX_CONTAINER as f64 && wanted.fract() == 0.0 {
                gen.int(wanted as i64 + 1, MAX_CONTAINER + 1)
            } else {
                gen.int(1, 13)
            };
            let container = Value::from(gen.string(len as usize, len as usize));
            Ok(place(def, f, Side::Right, blank, container))
        }
    }
}

fn in_range_index(gen: &mut Generator, len: usize) -> i64 {
    if len == 0 {
        0
    } else {
        gen.int(0, len as i64)
    }
}
