//! Value classification and type sets.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The classified type of a runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Number,
    String,
    Boolean,
    Array,
    /// Anything outside the four question types (JSON `null` or objects).
    Unknown,
}

impl ValueType {
    /// The four types a question value can have, in display order.
    pub const ALL: [ValueType; 4] = [
        ValueType::Number,
        ValueType::String,
        ValueType::Boolean,
        ValueType::Array,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Boolean => "boolean",
            ValueType::Array => "array",
            ValueType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the type tag for a value.
pub fn classify(value: &Value) -> ValueType {
    match value {
        Value::Number(_) => ValueType::Number,
        Value::String(_) => ValueType::String,
        Value::Bool(_) => ValueType::Boolean,
        Value::Array(_) => ValueType::Array,
        Value::Null | Value::Object(_) => ValueType::Unknown,
    }
}

/// A set of value types.
///
/// Operator domains and acceptable-answer sets are `TypeSet`s. The
/// constructors are `const` so the operator table can be a static table.
/// `Unknown` has no bit and can never be a member.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TypeSet(u8);

impl TypeSet {
    pub const EMPTY: TypeSet = TypeSet(0);
    pub const NUMBER: TypeSet = TypeSet(1 << 0);
    pub const STRING: TypeSet = TypeSet(1 << 1);
    pub const BOOLEAN: TypeSet = TypeSet(1 << 2);
    pub const ARRAY: TypeSet = TypeSet(1 << 3);
    pub const ANY: TypeSet = TypeSet(0b1111);

    /// The singleton set for `t`; empty for `Unknown`.
    pub const fn of(t: ValueType) -> TypeSet {
        match t {
            ValueType::Number => TypeSet::NUMBER,
            ValueType::String => TypeSet::STRING,
            ValueType::Boolean => TypeSet::BOOLEAN,
            ValueType::Array => TypeSet::ARRAY,
            ValueType::Unknown => TypeSet::EMPTY,
        }
    }

    pub const fn union(self, other: TypeSet) -> TypeSet {
        TypeSet(self.0 | other.0)
    }

    pub const fn contains(self, t: ValueType) -> bool {
        self.0 & TypeSet::of(t).0 != 0
    }

    pub const fn contains_all(self, other: TypeSet) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in display order (number, string, boolean, array).
    pub fn iter(self) -> impl Iterator<Item = ValueType> {
        ValueType::ALL.into_iter().filter(move |t| self.contains(*t))
    }
}

impl fmt::Debug for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, t) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", t)?;
        }
        write!(f, "}}")
    }
}
