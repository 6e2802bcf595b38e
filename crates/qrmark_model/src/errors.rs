/// Validation failure raised by the item model when a property is written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SemanticError {
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    #[error("property {name} expects a {expected} value")]
    WrongKind { name: String, expected: &'static str },
    #[error("property {name} value {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: String,
        value: i32,
        min: i32,
        max: i32,
    },
    #[error("property {name} must not be blank")]
    Blank { name: String },
}

pub type SemanticResult<T> = Result<T, SemanticError>;

/// Failure to resolve an item handle to its extension object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandleError {
    #[error("item handle has no extension object")]
    Unbound,
}
