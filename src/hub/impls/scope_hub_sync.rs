use std::sync::Arc;
use std::time::Duration;
use futures_util::stream::{self, StreamExt};
use log::{debug, warn};
use crate::hub::structs::scope_hub::ScopeHub;
use crate::node::structs::node::Node;
use crate::protocol::enums::packet::Packet;
use crate::protocol::enums::packet_kind::PacketKind;
use crate::protocol::structs::reaction::Reaction;
use crate::protocol::types::{complete, completion_slot};
use crate::stats::enums::stats_event::StatsEvent;

impl ScopeHub {
    /// The sync barrier: every node owning a session in the scope is asked
    /// to flush its dirty holder data, and the call returns once each of
    /// them replied or individually timed out. Fan-out concurrency is
    /// bounded by `sync_parallelism`.
    pub async fn sync_scope(&self, scope_id: &str) {
        let node_ids = self.sessions.nodes_owning_scope(scope_id);
        if node_ids.is_empty() {
            return;
        }
        let parallelism = self.config.access_server.sync_parallelism.max(1) as usize;
        let nodes: Vec<Arc<Node>> = node_ids.iter()
            .filter_map(|node_id| self.nodes.get(node_id))
            .collect();
        debug!("[SYNC] Scope {} barrier over {} nodes", scope_id, nodes.len());
        stream::iter(nodes)
            .map(|node| self.sync_node(node, scope_id))
            .buffer_unordered(parallelism)
            .collect::<Vec<()>>()
            .await;
    }

    /// Asks one node to flush; persists whatever holders it returns.
    async fn sync_node(&self, node: Arc<Node>, scope_id: &str) {
        let timeout = Duration::from_secs(self.config.access_server.request_timeout);
        let (slot, receiver) = completion_slot();
        let on_batch = slot.clone();
        let on_timeout = slot.clone();
        let on_failure = slot;
        let reaction = Reaction::builder()
            .on(PacketKind::BatchSaveData, move |packet| complete(&on_batch, Some(packet)))
            .timeout(timeout, move || complete(&on_timeout, None))
            .on_exception(move |_| complete(&on_failure, None));
        let sent = node.talker.send(Packet::RequestSync {
            scope_id: scope_id.to_string(),
        }, reaction);
        if sent.is_err() {
            warn!("[SYNC] Could not reach node {} for scope {}", node.id, scope_id);
            return;
        }
        self.update_stats(StatsEvent::SyncRequestsSent, 1);
        match receiver.await {
            Ok(Some(Packet::BatchSaveData { data, .. })) => {
                self.update_stats(StatsEvent::SyncResponsesReceived, 1);
                let scope = self.scopes.get_or_create(scope_id);
                for (holder_id, payload) in data {
                    if let Err(error) = scope.set_data_raw(&holder_id, &payload).await {
                        warn!("[SYNC] Node {} sent bad data for {}/{}: {}", node.id, scope_id, holder_id, error);
                    }
                }
            }
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => {
                self.update_stats(StatsEvent::Timeouts, 1);
                warn!("[SYNC] Node {} did not answer the {} barrier in time", node.id, scope_id);
            }
        }
    }
}
