//! The expression node model.

use blankout_value::{to_text, TypeSet, Value};
use std::fmt;

/// A unary evaluation function.
pub type UnaryFn = fn(&Value) -> Value;

/// A binary evaluation function.
pub type BinaryFn = fn(&Value, &Value) -> Value;

/// One token of a rendered expression, enough for a caller to lay the
/// question out and highlight the blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderToken {
    /// Canonical text of a literal operand.
    Literal(String),
    /// The blanked-out operand.
    Blank,
    /// An operator glyph or index bracket.
    Symbol(&'static str),
}

/// An expression with at most one blanked-out operand.
///
/// Operator nodes carry their evaluation function at its true arity, so a
/// unary operator with two operands cannot be represented at all. They also
/// carry the acceptable-answer types fixed at construction time. Trees are
/// immutable once built: [`Expr::substitute`] produces a fresh tree and the
/// original stays valid for as long as the question is posed.
#[derive(Clone)]
pub enum Expr {
    /// A fixed operand.
    Literal(Value),
    /// The elided operand. It remembers the value the question was built
    /// around, so an unfilled expression still evaluates.
    Blank(Value),
    /// A prefix operator over one operand.
    Unary {
        symbol: &'static str,
        eval: UnaryFn,
        accept: TypeSet,
        operand: Box<Expr>,
    },
    /// An infix operator over two operands.
    Binary {
        symbol: &'static str,
        eval: BinaryFn,
        accept: TypeSet,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Evaluates the tree. A blank evaluates to the value it was built
    /// around, so the unfilled question yields the expected value.
    pub fn evaluate(&self) -> Value {
        match self {
            Expr::Literal(v) | Expr::Blank(v) => v.clone(),
            Expr::Unary { eval, operand, .. } => eval(&operand.evaluate()),
            Expr::Binary { eval, lhs, rhs, .. } => eval(&lhs.evaluate(), &rhs.evaluate()),
        }
    }

    /// A copy of the tree with every blank replaced by `Literal(value)`.
    /// The original tree is untouched.
    pub fn substitute(&self, value: &Value) -> Expr {
        match self {
            Expr::Literal(v) => Expr::Literal(v.clone()),
            Expr::Blank(_) => Expr::Literal(value.clone()),
            Expr::Unary {
                symbol,
                eval,
                accept,
                operand,
            } => Expr::Unary {
                symbol: *symbol,
                eval: *eval,
                accept: *accept,
                operand: Box::new(operand.substitute(value)),
            },
            Expr::Binary {
                symbol,
                eval,
                accept,
                lhs,
                rhs,
            } => Expr::Binary {
                symbol: *symbol,
                eval: *eval,
                accept: *accept,
                lhs: Box::new(lhs.substitute(value)),
                rhs: Box::new(rhs.substitute(value)),
            },
        }
    }

    /// The value the blank was built around, when the tree has a blank.
    pub fn blank_value(&self) -> Option<&Value> {
        match self {
            Expr::Literal(_) => None,
            Expr::Blank(v) => Some(v),
            Expr::Unary { operand, .. } => operand.blank_value(),
            Expr::Binary { lhs, rhs, .. } => lhs.blank_value().or_else(|| rhs.blank_value()),
        }
    }

    /// The acceptable answer types of the root operator.
    pub fn accept(&self) -> Option<TypeSet> {
        match self {
            Expr::Unary { accept, .. } | Expr::Binary { accept, .. } => Some(*accept),
            Expr::Literal(_) | Expr::Blank(_) => None,
        }
    }

    /// Structured token form of the expression.
    pub fn render(&self) -> Vec<RenderToken> {
        let mut tokens = Vec::new();
        self.render_into(&mut tokens);
        tokens
    }

    fn render_into(&self, out: &mut Vec<RenderToken>) {
        match self {
            Expr::Literal(v) => out.push(RenderToken::Literal(to_text(v))),
            Expr::Blank(_) => out.push(RenderToken::Blank),
            Expr::Unary {
                symbol, operand, ..
            } => {
                out.push(RenderToken::Symbol(*symbol));
                operand.render_into(out);
            }
            Expr::Binary {
                symbol, lhs, rhs, ..
            } if *symbol == "[]" => {
                lhs.render_into(out);
                out.push(RenderToken::Symbol("["));
                rhs.render_into(out);
                out.push(RenderToken::Symbol("]"));
            }
            Expr::Binary {
                symbol, lhs, rhs, ..
            } => {
                lhs.render_into(out);
                out.push(RenderToken::Symbol(*symbol));
                rhs.render_into(out);
            }
        }
    }
}

/// Structural equality over shape, symbols, and operand values. The
/// evaluation function is keyed by the symbol and takes no part.
impl PartialEq for Expr {
    fn eq(&self, other: &Expr) -> bool {
        match (self, other) {
            (Expr::Literal(a), Expr::Literal(b)) => a == b,
            (Expr::Blank(a), Expr::Blank(b)) => a == b,
            (
                Expr::Unary {
                    symbol: a_sym,
                    accept: a_acc,
                    operand: a_op,
                    ..
                },
                Expr::Unary {
                    symbol: b_sym,
                    accept: b_acc,
                    operand: b_op,
                    ..
                },
            ) => a_sym == b_sym && a_acc == b_acc && a_op == b_op,
            (
                Expr::Binary {
                    symbol: a_sym,
                    accept: a_acc,
                    lhs: a_lhs,
                    rhs: a_rhs,
                    ..
                },
                Expr::Binary {
                    symbol: b_sym,
                    accept: b_acc,
                    lhs: b_lhs,
                    rhs: b_rhs,
                    ..
                },
            ) => a_sym == b_sym && a_acc == b_acc && a_lhs == b_lhs && a_rhs == b_rhs,
            _ => false,
        }
    }
}

/// Infix text with `?` for the blank: `? + 3`, `!?`, `[1,2,3][?]`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(v) => f.write_str(&to_text(v)),
            Expr::Blank(_) => f.write_str("?"),
            Expr::Unary {
                symbol, operand, ..
            } => write!(f, "{}{}", symbol, operand),
            Expr::Binary {
                symbol, lhs, rhs, ..
            } if *symbol == "[]" => write!(f, "{}[{}]", lhs, rhs),
            Expr::Binary {
                symbol, lhs, rhs, ..
            } => write!(f, "{} {} {}", lhs, symbol, rhs),
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.blank_value() {
            Some(v) => write!(f, "Expr({} with ? = {})", self, to_text(v)),
            None => write!(f, "Expr({})", self),
        }
    }
}
