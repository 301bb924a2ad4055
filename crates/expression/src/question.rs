//! Question synthesis.

use crate::error::ExprError;
use crate::expr::Expr;
use crate::registry::operators_for;
use crate::strategy;
use blankout_random::Generator;
use blankout_value::{classify, ensure_classifiable, Value};

/// Builds a question around `blank`, choosing uniformly among the operators
/// whose domain covers the blank's type.
///
/// Every classifiable type has at least one operator, so this fails only
/// for unclassifiable values, which are rejected up front.
pub fn for_blank(gen: &mut Generator, blank: Value) -> Result<Expr, ExprError> {
    ensure_classifiable(&blank)?;
    let ops = operators_for(classify(&blank));
    let def = gen.choice(&ops)?;
    strategy::build(def, gen, blank)
}

/// Draws a fresh value at `level` and builds a question around it.
pub fn for_level(gen: &mut Generator, level: u8) -> Result<Expr, ExprError> {
    let blank = gen.value_for_level(level)?;
    for_blank(gen, blank)
}
