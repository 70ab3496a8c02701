use thiserror::Error;

/// Per-frame decode failures.
///
/// A failed decode drops the frame; it never tears down the connection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("frame truncated")]
    Truncated,
    #[error("unknown packet type id {0}")]
    UnknownPacketType(u8),
    #[error("invalid utf-8 in string field")]
    InvalidUtf8,
    #[error("invalid presence flag {0}")]
    InvalidFlag(u8),
    #[error("unknown error code {0}")]
    UnknownErrorCode(u8),
    #[error("unknown error level {0}")]
    UnknownErrorLevel(u8),
    #[error("trailing bytes after payload")]
    TrailingBytes,
}
