use std::collections::BTreeSet;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use crate::protocol::structs::talker::Talker;

/// One authenticated node: its identity, account-derived scope permissions
/// and the talker bound to its connection.
pub struct Node {
    pub id: String,
    pub login: String,
    pub allowed_scopes: BTreeSet<String>,
    pub talker: Arc<Talker>,
    pub remote_addr: SocketAddr,
    pub created_at: u64,
    pub last_heartbeat: AtomicU64,
}
