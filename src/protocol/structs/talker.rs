use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use tokio::sync::mpsc::UnboundedSender;
use crate::protocol::enums::outbound_message::OutboundMessage;
use crate::protocol::structs::packet_controller::PacketController;

/// Connection-level state shared between a talker and its timeout tasks.
pub struct ConnectionState {
    pub(crate) open: AtomicBool,
    pub(crate) blocked: AtomicBool,
    pub(crate) outbound: UnboundedSender<OutboundMessage>,
}

/// Wraps one physical connection: a correlation controller plus the channel
/// feeding the task that owns the socket.
pub struct Talker {
    pub remote_addr: SocketAddr,
    pub(crate) state: Arc<ConnectionState>,
    pub(crate) controller: PacketController,
}
