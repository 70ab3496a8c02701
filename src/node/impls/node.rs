use std::collections::BTreeSet;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use crate::common::common::current_time;
use crate::node::structs::node::Node;
use crate::protocol::structs::talker::Talker;

impl Node {
    pub fn new(
        id: &str,
        login: &str,
        allowed_scopes: BTreeSet<String>,
        talker: Arc<Talker>,
        remote_addr: SocketAddr,
    ) -> Node {
        let now = current_time();
        Node {
            id: id.to_string(),
            login: login.to_string(),
            allowed_scopes,
            talker,
            remote_addr,
            created_at: now,
            last_heartbeat: AtomicU64::new(now),
        }
    }

    pub fn is_scope_allowed(&self, scope_id: &str) -> bool {
        self.allowed_scopes.contains(scope_id)
    }

    pub fn touch_heartbeat(&self) {
        self.last_heartbeat.store(current_time(), Ordering::SeqCst);
    }

    pub fn seconds_since_heartbeat(&self) -> u64 {
        current_time().saturating_sub(self.last_heartbeat.load(Ordering::SeqCst))
    }
}
