use std::net::SocketAddr;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::hub::structs::scope_hub::ScopeHub;
use crate::node::structs::node::Node;
use crate::protocol::structs::talker::Talker;

/// One WebSocket connection. The talker is created when the actor starts;
/// the node slot is filled by a successful authentication and shared with
/// the worker tasks spawned for it.
pub struct AccessConnection {
    pub(crate) hub: Arc<ScopeHub>,
    pub(crate) remote_addr: SocketAddr,
    pub(crate) talker: Option<Arc<Talker>>,
    pub(crate) node: Arc<RwLock<Option<Arc<Node>>>>,
}
