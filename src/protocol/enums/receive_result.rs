use crate::protocol::enums::decode_error::DecodeError;
use crate::protocol::enums::packet::Packet;

/// What became of one inbound frame.
#[derive(Debug)]
pub enum ReceiveResult {
    /// Matched a pending transmission; its reaction ran.
    Response,
    /// Matched a registered waiter; the packet was delivered to it.
    Consumed,
    /// Unsolicited frame for the application dispatch layer, paired with the
    /// sequence a reply must be derived from.
    Request(Packet, u16),
    /// The talker is blocked; the frame was discarded unread.
    Ignored,
    /// The frame did not decode; it is dropped and logged by the caller.
    Invalid(DecodeError),
}
