use blankout_random::GenError;
use blankout_value::ValueError;
use thiserror::Error;

/// Errors from question synthesis and validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    /// No table entry for an operator symbol. The table is closed, so this
    /// is a wiring bug, not a user condition.
    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    /// Validation was handed an expression with no blank under an operator.
    #[error("expression is not a blanked question")]
    NotAQuestion,

    #[error(transparent)]
    Gen(#[from] GenError),

    #[error(transparent)]
    Value(#[from] ValueError),
}
