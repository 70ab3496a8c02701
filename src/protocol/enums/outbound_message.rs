use crate::protocol::enums::close_code::CloseCode;

/// Control messages flowing from a talker to the task that owns the socket.
#[derive(Debug)]
pub enum OutboundMessage {
    Frame(Vec<u8>),
    Close(CloseCode, String),
}
