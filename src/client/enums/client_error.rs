use thiserror::Error;
use crate::protocol::enums::error_code::ErrorCode;

/// Failures surfaced by client calls.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClientError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("request timed out")]
    Timeout,
    #[error("server error {code}: {message}")]
    Server { code: ErrorCode, message: String },
    #[error("protocol violation: {0}")]
    Protocol(String),
    #[error("authentication rejected: {0}")]
    AuthRejected(String),
}
