use std::sync::Arc;
use ahash::AHashMap;
use parking_lot::Mutex;
use crate::protocol::structs::packet_waiter::PacketWaiter;
use crate::protocol::structs::transmission::Transmission;

/// Per-connection correlation state.
///
/// Pending transmissions are keyed by the sequence their response will carry
/// (`request sequence + 1`), so an inbound frame's sequence can be looked up
/// directly. The map is shared with the scheduled timeout tasks.
pub struct PacketController {
    pub(crate) pending: Arc<Mutex<AHashMap<u16, Arc<Transmission>>>>,
    pub(crate) waiters: Mutex<Vec<PacketWaiter>>,
}
