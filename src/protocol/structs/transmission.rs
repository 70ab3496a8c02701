use std::sync::atomic::AtomicBool;
use parking_lot::Mutex;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use crate::protocol::enums::packet::Packet;
use crate::protocol::structs::reaction::Reaction;

/// One outstanding request: the packet as sent, its reaction, and the
/// exactly-once settlement gate raced by responses, timeouts and failures.
pub struct Transmission {
    pub sequence: u16,
    pub packet: Packet,
    pub(crate) reaction: Mutex<Reaction>,
    pub(crate) received: AtomicBool,
    pub(crate) timeout_tasks: Mutex<Vec<JoinHandle<()>>>,
    pub(crate) settled_notify: Notify,
}
