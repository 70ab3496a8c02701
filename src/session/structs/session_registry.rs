use std::sync::Arc;
use ahash::{AHashMap, AHashSet};
use parking_lot::RwLock;
use tokio::sync::Mutex;
use crate::session::structs::session_key::SessionKey;

/// Owner slot for one key. The async mutex serializes every ownership
/// mutation for the key, including the awaited eviction handshake.
pub(crate) struct SessionSlot {
    pub lock: Mutex<SlotState>,
}

pub(crate) struct SlotState {
    pub owner: Option<String>,
}

/// Cluster-wide map of active sessions plus the indexes derived from it:
/// scope to owning nodes (sync fan-out) and node to keys (disconnect
/// cleanup).
pub struct SessionRegistry {
    pub(crate) slots: RwLock<AHashMap<SessionKey, Arc<SessionSlot>>>,
    pub(crate) scope_index: RwLock<AHashMap<String, AHashMap<String, u64>>>,
    pub(crate) node_index: RwLock<AHashMap<String, AHashSet<SessionKey>>>,
}
