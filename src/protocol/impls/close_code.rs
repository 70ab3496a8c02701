use crate::protocol::enums::close_code::CloseCode;

impl CloseCode {
    /// The numeric close code sent on the wire. `Normal` keeps the standard
    /// WebSocket value; everything else lives in the 4000 private range.
    pub fn value(&self) -> u16 {
        match self {
            CloseCode::Normal => 1000,
            CloseCode::Timeout => 4001,
            CloseCode::AlreadyAuthenticated => 4002,
            CloseCode::WrongCredentials => 4003,
            CloseCode::InvalidData => 4004,
            CloseCode::NodeAlreadyExists => 4005,
            CloseCode::AuthenticationTimeout => 4006,
            CloseCode::NotAuthenticated => 4007,
            CloseCode::UnexpectedBehaviour => 4008,
            CloseCode::PingFailed => 4009,
            CloseCode::RateLimited => 4010,
            CloseCode::InternalError => 4011,
            CloseCode::Shutdown => 4012,
        }
    }

    /// Whether a disconnected peer should attempt to reconnect.
    pub fn retry(&self) -> bool {
        !matches!(self,
            CloseCode::WrongCredentials
            | CloseCode::InvalidData
            | CloseCode::NodeAlreadyExists
        )
    }

    /// Whether the peer may still answer in-flight requests while the close
    /// drains. Only a shutdown close keeps the reply window open.
    pub fn allow_respond(&self) -> bool {
        matches!(self, CloseCode::Shutdown)
    }

    pub fn from_u16(value: u16) -> Option<CloseCode> {
        match value {
            1000 => Some(CloseCode::Normal),
            4001 => Some(CloseCode::Timeout),
            4002 => Some(CloseCode::AlreadyAuthenticated),
            4003 => Some(CloseCode::WrongCredentials),
            4004 => Some(CloseCode::InvalidData),
            4005 => Some(CloseCode::NodeAlreadyExists),
            4006 => Some(CloseCode::AuthenticationTimeout),
            4007 => Some(CloseCode::NotAuthenticated),
            4008 => Some(CloseCode::UnexpectedBehaviour),
            4009 => Some(CloseCode::PingFailed),
            4010 => Some(CloseCode::RateLimited),
            4011 => Some(CloseCode::InternalError),
            4012 => Some(CloseCode::Shutdown),
            _ => None,
        }
    }
}

impl std::fmt::Display for CloseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({})", self, self.value())
    }
}
