/// Application error codes returned to nodes for recoverable conditions.
///
/// These never close the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorCode {
    Unknown = 0,
    ScopeIsNotAllowed = 1,
    SessionAlreadyExists = 2,
    SessionNotFound = 3,
    ErrorInData = 4,
    FieldIsNotNumber = 5,
}
