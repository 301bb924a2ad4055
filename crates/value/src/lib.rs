//! Runtime value model for fill-the-blank expression questions.
//!
//! Question values are JSON values restricted to four types: numbers,
//! strings, booleans, and arrays of those (nested arrays included). This
//! crate provides the type classification the operator table is keyed on,
//! the canonical text encoding that tiles and uniqueness checks use, strict
//! deep equality, and the coercions the evaluation functions apply to
//! mistyped operands.
//!
//! ```
//! use blankout_value::{classify, from_text, to_text, ValueType};
//!
//! let v = from_text("[1,\"two\",true]").unwrap();
//! assert_eq!(classify(&v), ValueType::Array);
//! assert_eq!(to_text(&v), "[1,\"two\",true]");
//! ```

pub mod canon;
pub mod coerce;
pub mod equal;
pub mod error;
pub mod types;

pub use canon::{ensure_classifiable, from_text, number_value, to_text};
pub use coerce::{to_number, to_text_js, truthy};
pub use equal::deep_equal;
pub use error::ValueError;
pub use types::{classify, TypeSet, ValueType};

pub use serde_json::Value;
