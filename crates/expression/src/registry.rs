//! The operator table.
//!
//! A closed table, one entry per operator: the blank-value types it can
//! build a question around (`domain`), the acceptable-answer rule keyed on
//! the non-blank operand's type (`accepts`), and the building strategy that
//! wraps a blank value into a complete expression. Strategies carry the
//! evaluation function at its true arity, so the table cannot pair a unary
//! evaluator with a binary build.

use crate::error::ExprError;
use crate::eval;
use crate::expr::{BinaryFn, UnaryFn};
use blankout_value::{TypeSet, ValueType};

/// How an operator wraps a blank value into an expression.
#[derive(Clone, Copy)]
pub enum BuildStrategy {
    /// Companion of the blank's own type, blank on a random side.
    SameType(BinaryFn),
    /// Fresh random number companion, blank on a random side.
    Numeric(BinaryFn),
    /// Fresh random boolean companion, blank on a random side.
    Boolean(BinaryFn),
    /// Companion of a uniformly random type, blank on a random side.
    AnyType(BinaryFn),
    /// The blank is the sole operand of a prefix operator.
    Prefix(UnaryFn),
    /// Placement keeping the divisor non-zero and the quotient exact.
    Division(BinaryFn),
    /// Non-zero companion; dividends below 2 stay on the left.
    Modulus(BinaryFn),
    /// Container or index placement, depending on which the blank is.
    Index(BinaryFn),
}

/// Computes the acceptable answer types from the non-blank operand's type.
pub type AcceptsFn = fn(ValueType) -> TypeSet;

/// One operator of the drill language.
pub struct OperatorDef {
    pub symbol: &'static str,
    /// Blank-value types this operator can build a question around.
    pub domain: TypeSet,
    pub accepts: AcceptsFn,
    pub strategy: BuildStrategy,
}

// ------------------------------------------------------- accepts rules

fn same_as_other(other: ValueType) -> TypeSet {
    TypeSet::of(other)
}

fn number_only(_other: ValueType) -> TypeSet {
    TypeSet::NUMBER
}

fn boolean_only(_other: ValueType) -> TypeSet {
    TypeSet::BOOLEAN
}

fn any_type(_other: ValueType) -> TypeSet {
    TypeSet::ANY
}

/// A container on the other side means the blank is the index; anything
/// else means the blank is the container.
fn index_rule(other: ValueType) -> TypeSet {
    match other {
        ValueType::String | ValueType::Array => TypeSet::NUMBER,
        _ => TypeSet::STRING.union(TypeSet::ARRAY),
    }
}

const NUMBER_OR_STRING: TypeSet = TypeSet::NUMBER.union(TypeSet::STRING);
const INDEXABLE: TypeSet = TypeSet::NUMBER.union(TypeSet::STRING).union(TypeSet::ARRAY);

/// Every operator, in display order.
pub static OPERATORS: &[OperatorDef] = &[
    OperatorDef {
        symbol: "+",
        domain: NUMBER_OR_STRING,
        accepts: same_as_other,
        strategy: BuildStrategy::SameType(eval::add),
    },
    OperatorDef {
        symbol: "-",
        domain: TypeSet::NUMBER,
        accepts: number_only,
        strategy: BuildStrategy::Numeric(eval::subtract),
    },
    OperatorDef {
        symbol: "*",
        domain: TypeSet::NUMBER,
        accepts: number_only,
        strategy: BuildStrategy::Numeric(eval::multiply),
    },
    OperatorDef {
        symbol: "/",
        domain: TypeSet::NUMBER,
        accepts: number_only,
        strategy: BuildStrategy::Division(eval::divide),
    },
    OperatorDef {
        symbol: "%",
        domain: TypeSet::NUMBER,
        accepts: number_only,
        strategy: BuildStrategy::Modulus(eval::modulo),
    },
    OperatorDef {
        symbol: "<",
        domain: TypeSet::NUMBER,
        accepts: number_only,
        strategy: BuildStrategy::Numeric(eval::less),
    },
    OperatorDef {
        symbol: "<=",
        domain: TypeSet::NUMBER,
        accepts: number_only,
        strategy: BuildStrategy::Numeric(eval::less_equal),
    },
    OperatorDef {
        symbol: ">",
        domain: TypeSet::NUMBER,
        accepts: number_only,
        strategy: BuildStrategy::Numeric(eval::greater),
    },
    OperatorDef {
        symbol: ">=",
        domain: TypeSet::NUMBER,
        accepts: number_only,
        strategy: BuildStrategy::Numeric(eval::greater_equal),
    },
    OperatorDef {
        symbol: "[]",
        domain: INDEXABLE,
        accepts: index_rule,
        strategy: BuildStrategy::Index(eval::index),
    },
    OperatorDef {
        symbol: "===",
        domain: TypeSet::ANY,
        accepts: any_type,
        strategy: BuildStrategy::AnyType(eval::strict_eq),
    },
    OperatorDef {
        symbol: "!==",
        domain: TypeSet::ANY,
        accepts: any_type,
        strategy: BuildStrategy::AnyType(eval::strict_ne),
    },
    OperatorDef {
        symbol: "&&",
        domain: TypeSet::BOOLEAN,
        accepts: boolean_only,
        strategy: BuildStrategy::Boolean(eval::and),
    },
    OperatorDef {
        symbol: "||",
        domain: TypeSet::BOOLEAN,
        accepts: boolean_only,
        strategy: BuildStrategy::Boolean(eval::or),
    },
    OperatorDef {
        symbol: "!",
        domain: TypeSet::BOOLEAN,
        accepts: boolean_only,
        strategy: BuildStrategy::Prefix(eval::not),
    },
];

/// Looks up an operator by symbol. The table is closed, so a miss means a
/// caller invented a symbol.
pub fn lookup(symbol: &str) -> Result<&'static OperatorDef, ExprError> {
    OPERATORS
        .iter()
        .find(|op| op.symbol == symbol)
        .ok_or_else(|| ExprError::UnknownOperator(symbol.to_string()))
}

/// The operators able to build a question around a blank of type `t`.
pub fn operators_for(t: ValueType) -> Vec<&'static OperatorDef> {
    OPERATORS.iter().filter(|op| op.domain.contains(t)).collect()
}
