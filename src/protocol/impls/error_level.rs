use crate::protocol::enums::error_level::ErrorLevel;

impl ErrorLevel {
    pub fn from_u8(value: u8) -> Option<ErrorLevel> {
        match value {
            0 => Some(ErrorLevel::Warning),
            1 => Some(ErrorLevel::Error),
            2 => Some(ErrorLevel::Fatal),
            _ => None,
        }
    }
}
