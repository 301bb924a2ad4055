//! Feedback phrasing for judged answers.
//!
//! One sentence per verdict, built from the verdict alone so any front end
//! can show the same commentary.

use blankout_expression::{Expr, Outcome, Verdict};
use blankout_value::{classify, to_text, ValueType};

/// "a number", "an array".
pub fn article(t: ValueType) -> String {
    if t == ValueType::Array {
        format!("an {}", t)
    } else {
        format!("a {}", t)
    }
}

/// Joins alternatives: `x`, `x or y`, `x, y, or z`.
pub fn or_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] => format!("{} or {}", a, b),
        _ => {
            let head = &items[..items.len() - 1];
            format!("{}, or {}", head.join(", "), items[items.len() - 1])
        }
    }
}

/// Naive pluralization, enough for the words the session uses. A trailing
/// `y` becomes `ies`.
pub fn plural(word: &str, n: usize) -> String {
    if n == 1 {
        return word.to_string();
    }
    match word.strip_suffix('y') {
        Some(stem) => format!("{}ies", stem),
        None => format!("{}s", word),
    }
}

/// The posed line: expression, arrow, expected value.
pub fn question_line(expr: &Expr) -> String {
    format!("{} ⟹ {}", expr, to_text(&expr.evaluate()))
}

/// One sentence of commentary for a judged answer.
///
/// A near miss shows the original expression worked through with its own
/// value, so the learner sees why their pick came out different.
pub fn commentary(verdict: &Verdict) -> String {
    let shown = to_text(&verdict.answer);
    match verdict.outcome() {
        Outcome::Pass => format!("{} is correct!", shown),
        Outcome::WrongType => {
            let accepted: Vec<String> = verdict
                .expr
                .accept()
                .map(|set| set.iter().map(article).collect())
                .unwrap_or_default();
            format!(
                "{} is {}, not {}.",
                shown,
                article(classify(&verdict.answer)),
                or_list(&accepted)
            )
        }
        Outcome::NearMiss => format!(
            "{} is the right type but isn't quite the right value. {}",
            shown,
            question_line(&verdict.corrected())
        ),
        Outcome::CompatibleTypeWrongValue => format!(
            "{}, {}, is of an acceptable type for the operator but in this case you probably needed {}.",
            shown,
            article(classify(&verdict.answer)),
            article(classify(&verdict.in_blank))
        ),
    }
}
