use thiserror::Error;

/// Failures surfaced by scope operations. All of them map onto application
/// error packets; none of them tears down a connection.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScopeError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("holder data is not a JSON object")]
    DataNotObject,
    #[error("field `{0}` is present but not a number")]
    FieldIsNotNumber(String),
    #[error("field `{0}` is not a valid field name")]
    InvalidFieldName(String),
}
