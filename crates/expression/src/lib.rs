//! Expression synthesis and answer validation for fill-the-blank drills.
//!
//! A question is an expression tree with one operand elided. The operator
//! table knows, per operator, how to evaluate, which answer types are
//! acceptable, and how to build a well-posed expression around an arbitrary
//! blank value. [`validate`] judges a candidate by substituting it into the
//! blank and comparing what comes out against what the original produces.
//!
//! ```
//! use blankout_expression::{for_level, validate};
//! use blankout_random::Generator;
//!
//! let mut gen = Generator::with_seed([7u8; 32]);
//! let question = for_level(&mut gen, 3).unwrap();
//! // The blanked-out value itself is always an acceptable answer.
//! let original = question.blank_value().unwrap().clone();
//! let verdict = validate(&question, &original).unwrap();
//! assert!(verdict.passed);
//! ```

pub mod error;
pub mod eval;
pub mod expr;
pub mod question;
pub mod registry;
pub mod strategy;
pub mod verdict;

pub use error::ExprError;
pub use expr::{BinaryFn, Expr, RenderToken, UnaryFn};
pub use question::{for_blank, for_level};
pub use registry::{lookup, operators_for, AcceptsFn, BuildStrategy, OperatorDef, OPERATORS};
pub use strategy::build;
pub use verdict::{validate, Outcome, Verdict};
