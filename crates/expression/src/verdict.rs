//! Answer validation.

use crate::error::ExprError;
use crate::expr::Expr;
use blankout_value::{classify, deep_equal, Value};

/// Everything a presentation layer needs to report a judged answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// The answer is type-legal and reproduces the expected value.
    pub passed: bool,
    /// The answer's type is in the operator's acceptable set.
    pub type_ok: bool,
    /// The filled-in expression evaluates to the expected value.
    pub value_right: bool,
    /// The answer's type equals the blanked-out value's type. Shapes the
    /// failure message; never part of the pass decision.
    pub exact_type: bool,
    /// The value the question was built around.
    pub in_blank: Value,
    /// The candidate answer.
    pub answer: Value,
    /// What the question as posed evaluates to.
    pub expected: Value,
    /// What the answer-filled expression evaluates to.
    pub answered: Value,
    /// The question as posed.
    pub expr: Expr,
    /// The question with the answer substituted in.
    pub filled: Expr,
}

/// Failure classification derived from a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    /// The answer's type is outside the operator's acceptable set.
    WrongType,
    /// Acceptable type for the operator, but not the type the question was
    /// built around, and the wrong value.
    CompatibleTypeWrongValue,
    /// The exact type the question was built around, but the wrong value.
    NearMiss,
}

/// Judges a candidate answer against a posed question.
///
/// Pure: the same question and answer always yield the same verdict, and
/// the question itself is untouched and can be judged again. Any type-legal
/// answer whose substitution reproduces the expected value passes; there
/// is no privileged answer, only equivalent ones.
///
/// Fails only when `expr` is not a question: no blank, or a bare value with
/// no operator over it.
pub fn validate(expr: &Expr, answer: &Value) -> Result<Verdict, ExprError> {
    let in_blank = match expr.blank_value() {
        Some(v) => v.clone(),
        None => return Err(ExprError::NotAQuestion),
    };
    let accept = expr.accept().ok_or(ExprError::NotAQuestion)?;
    let expected = expr.evaluate();
    let filled = expr.substitute(answer);
    let answered = filled.evaluate();
    let type_ok = accept.contains(classify(answer));
    let value_right = deep_equal(&answered, &expected);
    Ok(Verdict {
        passed: type_ok && value_right,
        type_ok,
        value_right,
        exact_type: classify(answer) == classify(&in_blank),
        in_blank,
        answer: answer.clone(),
        expected,
        answered,
        expr: expr.clone(),
        filled,
    })
}

impl Verdict {
    /// Collapses the verdict flags into one failure class.
    pub fn outcome(&self) -> Outcome {
        if self.passed {
            Outcome::Pass
        } else if !self.type_ok {
            Outcome::WrongType
        } else if self.exact_type {
            Outcome::NearMiss
        } else {
            Outcome::CompatibleTypeWrongValue
        }
    }

    /// The question with its original value back in the blank, the worked
    /// example shown after a near miss.
    pub fn corrected(&self) -> Expr {
        self.expr.substitute(&self.in_blank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval;
    use blankout_value::TypeSet;
    use serde_json::json;

    fn plus(blank: Value, companion: Value) -> Expr {
        Expr::Binary {
            symbol: "+",
            eval: eval::add,
            accept: TypeSet::NUMBER,
            lhs: Box::new(Expr::Blank(blank)),
            rhs: Box::new(Expr::Literal(companion)),
        }
    }

    #[test]
    fn equivalent_answers_pass_alongside_the_original() {
        // ? * 0 with blank 5: every number reproduces 0.
        let expr = Expr::Binary {
            symbol: "*",
            eval: eval::multiply,
            accept: TypeSet::NUMBER,
            lhs: Box::new(Expr::Blank(json!(5))),
            rhs: Box::new(Expr::Literal(json!(0))),
        };
        for answer in [json!(5), json!(7), json!(-3)] {
            let v = validate(&expr, &answer).unwrap();
            assert!(v.passed, "{} should pass", answer);
            assert_eq!(v.outcome(), Outcome::Pass);
        }
    }

    #[test]
    fn wrong_type_fails_even_when_the_value_coincides() {
        // ? + 0 with blank 5: the string "5" concatenates to "50", but even
        // an answer that evaluated right would fail the type gate first.
        let expr = plus(json!(5), json!(0));
        let v = validate(&expr, &json!("5")).unwrap();
        assert!(!v.passed);
        assert!(!v.type_ok);
        assert_eq!(v.outcome(), Outcome::WrongType);
        assert_eq!(v.answered, json!("50"));
        assert_eq!(v.expected, json!(5));
    }

    #[test]
    fn near_miss_is_right_type_wrong_value() {
        let expr = plus(json!(5), json!(3));
        let v = validate(&expr, &json!(4)).unwrap();
        assert!(!v.passed);
        assert!(v.type_ok);
        assert!(!v.value_right);
        assert!(v.exact_type);
        assert_eq!(v.outcome(), Outcome::NearMiss);
        assert_eq!(v.answered, json!(7));
        assert_eq!(v.corrected().to_string(), "5 + 3");
        assert_eq!(v.corrected().evaluate(), json!(8));
    }

    #[test]
    fn index_off_by_one_is_a_near_miss() {
        // [1,2,3][?] built around index 0; picking 1 reads the next element.
        let expr = Expr::Binary {
            symbol: "[]",
            eval: eval::index,
            accept: TypeSet::NUMBER,
            lhs: Box::new(Expr::Literal(json!([1, 2, 3]))),
            rhs: Box::new(Expr::Blank(json!(0))),
        };
        let v = validate(&expr, &json!(1)).unwrap();
        assert!(!v.passed);
        assert!(v.type_ok);
        assert!(v.exact_type);
        assert_eq!(v.answered, json!(2));
        assert_eq!(v.expected, json!(1));
        assert_eq!(v.outcome(), Outcome::NearMiss);
    }

    #[test]
    fn compatible_type_wrong_value_wants_the_blank_type() {
        // [1,2,3][?] with blank 0: an array answer is acceptable to the
        // operator's other role but cannot reproduce element 1.
        let expr = Expr::Binary {
            symbol: "[]",
            eval: eval::index,
            accept: TypeSet::ANY,
            lhs: Box::new(Expr::Literal(json!([1, 2, 3]))),
            rhs: Box::new(Expr::Blank(json!(0))),
        };
        let v = validate(&expr, &json!([1, 2, 3])).unwrap();
        assert!(!v.passed);
        assert!(v.type_ok);
        assert!(!v.exact_type);
        assert_eq!(v.outcome(), Outcome::CompatibleTypeWrongValue);
        assert_eq!(v.answered, Value::Null);

        // Equality accepts any type, so "5" against a 5 blank is compatible
        // but neither exact nor right.
        let eq = Expr::Binary {
            symbol: "===",
            eval: eval::strict_eq,
            accept: TypeSet::ANY,
            lhs: Box::new(Expr::Blank(json!(5))),
            rhs: Box::new(Expr::Literal(json!(5))),
        };
        let v = validate(&eq, &json!("5")).unwrap();
        assert!(v.type_ok);
        assert!(!v.value_right);
        assert!(!v.exact_type);
        assert_eq!(v.outcome(), Outcome::CompatibleTypeWrongValue);
    }

    #[test]
    fn negation_passes_only_the_matching_boolean() {
        let expr = Expr::Unary {
            symbol: "!",
            eval: eval::not,
            accept: TypeSet::BOOLEAN,
            operand: Box::new(Expr::Blank(json!(true))),
        };
        let same = validate(&expr, &json!(true)).unwrap();
        assert!(same.passed);
        let flipped = validate(&expr, &json!(false)).unwrap();
        assert!(!flipped.passed);
        assert_eq!(flipped.outcome(), Outcome::NearMiss);
        assert_eq!(flipped.answered, json!(true));
        assert_eq!(flipped.expected, json!(false));
    }

    #[test]
    fn the_question_survives_judging() {
        let expr = plus(json!(5), json!(3));
        let before = expr.clone();
        let _ = validate(&expr, &json!(9)).unwrap();
        let _ = validate(&expr, &json!("x")).unwrap();
        assert_eq!(expr, before);
        // And judging is repeatable.
        let a = validate(&expr, &json!(4)).unwrap();
        let b = validate(&expr, &json!(4)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn non_questions_are_rejected() {
        let bare = Expr::Literal(json!(5));
        assert_eq!(
            validate(&bare, &json!(5)).unwrap_err(),
            ExprError::NotAQuestion
        );
        // A lone blank has no operator, so there is nothing to accept or
        // evaluate against.
        let lone = Expr::Blank(json!(5));
        assert_eq!(
            validate(&lone, &json!(5)).unwrap_err(),
            ExprError::NotAQuestion
        );
        // No blank anywhere under the operator.
        let closed = plus(json!(1), json!(2)).substitute(&json!(1));
        assert_eq!(
            validate(&closed, &json!(1)).unwrap_err(),
            ExprError::NotAQuestion
        );
    }

    #[test]
    fn verdict_carries_the_full_story() {
        let expr = plus(json!(2), json!(3));
        let v = validate(&expr, &json!(7)).unwrap();
        assert_eq!(v.in_blank, json!(2));
        assert_eq!(v.answer, json!(7));
        assert_eq!(v.expected, json!(5));
        assert_eq!(v.answered, json!(10));
        assert_eq!(v.expr.to_string(), "? + 3");
        assert_eq!(v.filled.to_string(), "7 + 3");
    }
}
