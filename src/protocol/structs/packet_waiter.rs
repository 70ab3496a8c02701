use tokio::sync::oneshot;
use crate::protocol::enums::packet::Packet;
use crate::protocol::enums::packet_kind::PacketKind;
use crate::protocol::types::WaitPredicate;

/// A one-shot subscription to the next unsolicited packet of a kind that
/// satisfies a predicate. Used by flows that do not follow the
/// request/response shape.
pub struct PacketWaiter {
    pub(crate) kind: PacketKind,
    pub(crate) predicate: WaitPredicate,
    pub(crate) sender: Option<oneshot::Sender<Packet>>,
}
