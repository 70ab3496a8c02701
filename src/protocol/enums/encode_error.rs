use thiserror::Error;

/// Frame encode failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("string field exceeds 65535 bytes")]
    StringTooLong,
    #[error("map exceeds 65535 entries")]
    MapTooLarge,
    #[error("list exceeds 65535 entries")]
    ListTooLarge,
}
