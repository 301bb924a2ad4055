use thiserror::Error;

/// Errors from value classification and parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    /// A value outside the four question types (`null` or an object),
    /// possibly nested inside an array.
    #[error("unclassifiable value: {0}")]
    Unclassifiable(String),

    /// Text that does not parse as a JSON value.
    #[error("invalid value text: {0}")]
    Parse(String),
}
