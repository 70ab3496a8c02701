use std::future::Future;
use std::sync::Arc;
use ahash::AHashMap;
use parking_lot::RwLock;
use tokio::sync::Mutex;
use crate::session::enums::acquire_outcome::AcquireOutcome;
use crate::session::structs::session_key::SessionKey;
use crate::session::structs::session_registry::{SessionRegistry, SessionSlot, SlotState};

impl SessionRegistry {
    pub fn new() -> SessionRegistry {
        SessionRegistry {
            slots: RwLock::new(AHashMap::new()),
            scope_index: RwLock::new(AHashMap::new()),
            node_index: RwLock::new(AHashMap::new()),
        }
    }

    fn slot(&self, key: &SessionKey) -> Arc<SessionSlot> {
        if let Some(slot) = self.slots.read().get(key) {
            return slot.clone();
        }
        self.slots.write().entry(key.clone()).or_insert_with(|| {
            Arc::new(SessionSlot { lock: Mutex::new(SlotState { owner: None }) })
        }).clone()
    }

    fn index_add(&self, key: &SessionKey, node_id: &str) {
        *self.scope_index.write()
            .entry(key.scope_id.clone()).or_default()
            .entry(node_id.to_string()).or_default() += 1;
        self.node_index.write()
            .entry(node_id.to_string()).or_default()
            .insert(key.clone());
    }

    fn index_remove(&self, key: &SessionKey, node_id: &str) {
        let mut scope_index = self.scope_index.write();
        if let Some(nodes) = scope_index.get_mut(&key.scope_id) {
            if let Some(count) = nodes.get_mut(node_id) {
                *count -= 1;
                if *count == 0 {
                    nodes.remove(node_id);
                }
            }
            if nodes.is_empty() {
                scope_index.remove(&key.scope_id);
            }
        }
        drop(scope_index);
        let mut node_index = self.node_index.write();
        if let Some(keys) = node_index.get_mut(node_id) {
            keys.remove(key);
            if keys.is_empty() {
                node_index.remove(node_id);
            }
        }
    }

    /// Takes ownership of the key for `node_id`.
    ///
    /// The slot lock is held across the whole call, including the awaited
    /// `evict` handshake, so two concurrent loads for the same key cannot
    /// both win. `evict` is invoked with the current owner's node id and must
    /// have flushed and persisted the owner's session data by the time it
    /// returns.
    pub async fn acquire<F, Fut>(&self, key: SessionKey, node_id: &str, evict: F) -> AcquireOutcome
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = ()>,
    {
        let slot = self.slot(&key);
        let mut state = slot.lock.lock().await;
        match state.owner.as_deref() {
            None => {
                state.owner = Some(node_id.to_string());
                self.index_add(&key, node_id);
                AcquireOutcome::Acquired
            }
            Some(owner) if owner == node_id => AcquireOutcome::AlreadyOwner,
            Some(owner) => {
                let previous_owner = owner.to_string();
                evict(previous_owner.clone()).await;
                self.index_remove(&key, &previous_owner);
                state.owner = Some(node_id.to_string());
                self.index_add(&key, node_id);
                AcquireOutcome::Transferred { previous_owner }
            }
        }
    }

    /// Releases the key if `node_id` owns it. Returns whether it did.
    pub async fn release(&self, key: &SessionKey, node_id: &str) -> bool {
        let slot = self.slot(key);
        let mut state = slot.lock.lock().await;
        if state.owner.as_deref() != Some(node_id) {
            return false;
        }
        state.owner = None;
        self.index_remove(key, node_id);
        true
    }

    /// Drops every session the node owns; used on disconnect. Returns the
    /// released keys so the caller can log or flush around them.
    pub async fn release_node(&self, node_id: &str) -> Vec<SessionKey> {
        let keys: Vec<SessionKey> = self.node_index.read()
            .get(node_id)
            .map(|keys| keys.iter().cloned().collect())
            .unwrap_or_default();
        let mut released = Vec::with_capacity(keys.len());
        for key in keys {
            if self.release(&key, node_id).await {
                released.push(key);
            }
        }
        released
    }

    pub async fn is_owner(&self, key: &SessionKey, node_id: &str) -> bool {
        let slot = self.slot(key);
        let state = slot.lock.lock().await;
        state.owner.as_deref() == Some(node_id)
    }

    pub async fn owner_of(&self, key: &SessionKey) -> Option<String> {
        let slot = self.slot(key);
        let state = slot.lock.lock().await;
        state.owner.clone()
    }

    /// The nodes currently owning at least one session in the scope. This is
    /// the fan-out set for the sync barrier.
    pub fn nodes_owning_scope(&self, scope_id: &str) -> Vec<String> {
        self.scope_index.read()
            .get(scope_id)
            .map(|nodes| nodes.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn active_sessions(&self) -> u64 {
        self.node_index.read().values().map(|keys| keys.len() as u64).sum()
    }

    pub fn sessions_of(&self, node_id: &str) -> Vec<SessionKey> {
        self.node_index.read()
            .get(node_id)
            .map(|keys| keys.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        SessionRegistry::new()
    }
}

impl SessionRegistry {
    /// Drops empty unowned slots so long-running processes do not accumulate
    /// one slot per key ever touched.
    pub fn prune_slots(&self) -> usize {
        let mut slots = self.slots.write();
        let before = slots.len();
        slots.retain(|_, slot| {
            match slot.lock.try_lock() {
                Ok(state) => state.owner.is_some(),
                Err(_) => true,
            }
        });
        before - slots.len()
    }
}
