use blankout_value::ValueType;
use thiserror::Error;

/// Errors from random value generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// A random choice over zero candidates. Operator domains and level
    /// tables keep this from happening; hitting it means the wiring between
    /// them is broken.
    #[error("random choice over an empty set")]
    EmptyChoice,

    /// Asked for a value of a type with no generation rule.
    #[error("cannot generate a {0} value")]
    Ungeneratable(ValueType),

    /// Distinct-value generation ran out of attempts. The caller learns how
    /// far it got instead of receiving a short list.
    #[error("found {found} of {requested} distinct values after {attempts} attempts per value")]
    Exhausted {
        requested: usize,
        found: usize,
        attempts: usize,
    },
}
