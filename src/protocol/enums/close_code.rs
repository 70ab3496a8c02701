/// Connection close codes.
///
/// Each code carries a wire value, whether the peer should bother
/// reconnecting, and whether the peer may still answer in-flight requests
/// while the close drains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseCode {
    Normal,
    Timeout,
    AlreadyAuthenticated,
    WrongCredentials,
    InvalidData,
    NodeAlreadyExists,
    AuthenticationTimeout,
    NotAuthenticated,
    UnexpectedBehaviour,
    PingFailed,
    RateLimited,
    InternalError,
    Shutdown,
}
