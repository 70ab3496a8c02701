use std::sync::Arc;
use std::time::Duration;
use log::{debug, warn};
use crate::hub::structs::scope_hub::ScopeHub;
use crate::node::structs::node::Node;
use crate::protocol::enums::close_code::CloseCode;
use crate::protocol::enums::packet::Packet;
use crate::protocol::enums::packet_kind::PacketKind;
use crate::protocol::structs::reaction::Reaction;
use crate::protocol::types::{complete, completion_slot};
use crate::session::enums::acquire_outcome::AcquireOutcome;
use crate::session::structs::session_key::SessionKey;
use crate::stats::enums::stats_event::StatsEvent;

impl ScopeHub {
    /// Takes session ownership for a node, evicting and flushing the current
    /// owner if there is one. Serialized per key by the registry.
    pub async fn acquire_session(&self, key: SessionKey, node_id: &str) -> AcquireOutcome {
        let evict_key = key.clone();
        let outcome = self.sessions.acquire(key, node_id, |owner| async move {
            self.evict_session_owner(&evict_key, &owner).await;
        }).await;
        match &outcome {
            AcquireOutcome::Acquired => {
                self.update_stats(StatsEvent::SessionsActive, 1);
            }
            AcquireOutcome::Transferred { previous_owner } => {
                debug!("[SESSIONS] Ownership transferred from {} to {}", previous_owner, node_id);
                self.update_stats(StatsEvent::SessionsEvicted, 1);
            }
            AcquireOutcome::AlreadyOwner => {}
        }
        outcome
    }

    /// Asks the current owner to stop its session and persists whatever data
    /// it flushes back. On a timeout, ownership still transfers; the stale
    /// owner's unflushed delta is abandoned.
    pub(crate) async fn evict_session_owner(&self, key: &SessionKey, owner_id: &str) {
        let Some(owner) = self.nodes.get(owner_id) else {
            debug!("[SESSIONS] Evicted owner {} of {} is already gone", owner_id, key);
            return;
        };
        let timeout = Duration::from_secs(self.config.access_server.request_timeout);
        let (slot, receiver) = completion_slot();
        let on_end = slot.clone();
        let on_timeout = slot.clone();
        let on_failure = slot;
        let reaction = Reaction::builder()
            .on(PacketKind::EndSession, move |packet| complete(&on_end, Some(packet)))
            .timeout(timeout, move || complete(&on_timeout, None))
            .on_exception(move |_| complete(&on_failure, None));
        let sent = owner.talker.send(Packet::StopSession {
            scope_id: key.scope_id.clone(),
            holder_id: key.holder_id.clone(),
        }, reaction);
        if sent.is_err() {
            warn!("[SESSIONS] Could not reach owner {} to stop {}", owner_id, key);
            return;
        }
        match receiver.await {
            Ok(Some(Packet::EndSession { data: Some(data), .. })) => {
                let scope = self.scopes.get_or_create(&key.scope_id);
                if let Err(error) = scope.set_data_raw(&key.holder_id, &data).await {
                    warn!("[SESSIONS] Flushed data from {} for {} did not persist: {}", owner_id, key, error);
                }
            }
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => {
                self.update_stats(StatsEvent::Timeouts, 1);
                warn!("[SESSIONS] Owner {} did not flush {} in time; abandoning its unflushed state", owner_id, key);
            }
        }
    }

    /// Ends one session at the owner's request, persisting any final data.
    pub async fn end_session(&self, key: &SessionKey, node_id: &str, data: Option<&str>) -> bool {
        if !self.sessions.is_owner(key, node_id).await {
            return false;
        }
        if let Some(data) = data {
            let scope = self.scopes.get_or_create(&key.scope_id);
            if let Err(error) = scope.set_data_raw(&key.holder_id, data).await {
                warn!("[SESSIONS] Final data for {} did not persist: {}", key, error);
            }
        }
        if self.sessions.release(key, node_id).await {
            self.update_stats(StatsEvent::SessionsActive, -1);
            return true;
        }
        false
    }

    /// Tears a node down: sessions released and registry entry removed
    /// before the talker close returns.
    pub async fn disconnect_node(&self, node: &Arc<Node>, code: CloseCode, reason: &str) {
        let released = self.sessions.release_node(&node.id).await;
        if !released.is_empty() {
            debug!("[SESSIONS] Released {} sessions of node {}", released.len(), node.id);
            self.update_stats(StatsEvent::SessionsActive, -(released.len() as i64));
        }
        if self.nodes.unregister(&node.id).is_some() {
            self.update_stats(StatsEvent::NodesActive, -1);
        }
        node.talker.close(code, reason);
    }
}
