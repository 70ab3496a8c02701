use crate::protocol::enums::error_code::ErrorCode;

impl ErrorCode {
    pub fn from_u8(value: u8) -> Option<ErrorCode> {
        match value {
            0 => Some(ErrorCode::Unknown),
            1 => Some(ErrorCode::ScopeIsNotAllowed),
            2 => Some(ErrorCode::SessionAlreadyExists),
            3 => Some(ErrorCode::SessionNotFound),
            4 => Some(ErrorCode::ErrorInData),
            5 => Some(ErrorCode::FieldIsNotNumber),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::Unknown => write!(f, "UNKNOWN"),
            ErrorCode::ScopeIsNotAllowed => write!(f, "SCOPE_IS_NOT_ALLOWED"),
            ErrorCode::SessionAlreadyExists => write!(f, "SESSION_ALREADY_EXISTS"),
            ErrorCode::SessionNotFound => write!(f, "SESSION_NOT_FOUND"),
            ErrorCode::ErrorInData => write!(f, "ERROR_IN_DATA"),
            ErrorCode::FieldIsNotNumber => write!(f, "FIELD_IS_NOT_NUMBER"),
        }
    }
}
