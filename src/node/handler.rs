use std::sync::Arc;
use log::{debug, warn};
use serde_json::Value;
use crate::hub::structs::scope_hub::ScopeHub;
use crate::node::structs::node::Node;
use crate::protocol::enums::close_code::CloseCode;
use crate::protocol::enums::error_code::ErrorCode;
use crate::protocol::enums::packet::Packet;
use crate::protocol::structs::responder::Responder;
use crate::scope::enums::scope_error::ScopeError;
use crate::session::structs::session_key::SessionKey;
use crate::stats::enums::stats_event::StatsEvent;

fn error_code(error: &ScopeError) -> ErrorCode {
    match error {
        ScopeError::Storage(_) => ErrorCode::Unknown,
        ScopeError::DataNotObject => ErrorCode::ErrorInData,
        ScopeError::FieldIsNotNumber(_) => ErrorCode::FieldIsNotNumber,
        ScopeError::InvalidFieldName(_) => ErrorCode::ErrorInData,
    }
}

/// Checks the node's allowed-scope set; a denial is answered immediately and
/// nothing else happens for the request.
fn scope_gate(node: &Node, scope_id: &str, responder: &Responder) -> bool {
    if node.is_scope_allowed(scope_id) {
        return true;
    }
    let _ = responder.respond_error(
        ErrorCode::ScopeIsNotAllowed,
        &format!("scope {} is not allowed for this account", scope_id),
    );
    false
}

/// Routes one authenticated inbound request. Runs on its own worker task so
/// a slow handler never blocks the connection's receive loop.
pub async fn handle_node_packet(hub: Arc<ScopeHub>, node: Arc<Node>, packet: Packet, responder: Responder) {
    match packet {
        Packet::Heartbeat => {
            node.touch_heartbeat();
            hub.update_stats(StatsEvent::Heartbeats, 1);
            let _ = responder.respond(Packet::HeartbeatAck);
        }
        Packet::LoadData { scope_id, holder_id } => {
            hub.update_stats(StatsEvent::LoadRequests, 1);
            handle_load_data(&hub, &node, scope_id, holder_id, &responder).await;
        }
        Packet::SaveData { scope_id, holder_id, data } => {
            hub.update_stats(StatsEvent::SaveRequests, 1);
            handle_save_data(&hub, &node, scope_id, holder_id, data, &responder).await;
        }
        Packet::BatchSaveData { scope_id, data } => {
            hub.update_stats(StatsEvent::BatchSaveRequests, 1);
            handle_batch_save(&hub, &node, scope_id, data, &responder).await;
        }
        Packet::EndSession { scope_id, holder_id, data } => {
            handle_end_session(&hub, &node, scope_id, holder_id, data, &responder).await;
        }
        Packet::RequestLeaderboard { scope_id, field, start_from, limit, position_holder_id } => {
            hub.update_stats(StatsEvent::LeaderboardRequests, 1);
            handle_leaderboard(&hub, &node, scope_id, field, start_from, limit, position_holder_id, &responder).await;
        }
        Packet::RequestTopPosition { scope_id, holder_id, field } => {
            hub.update_stats(StatsEvent::TopPositionRequests, 1);
            handle_top_position(&hub, &node, scope_id, holder_id, field, &responder).await;
        }
        Packet::Auth { .. } => {
            warn!("[NODE] {} sent Auth twice", node.id);
            hub.disconnect_node(&node, CloseCode::AlreadyAuthenticated, "already authenticated").await;
        }
        other => {
            // Late responses whose correlation entry already timed out land
            // here; they must stay harmless.
            debug!("[NODE] {} sent unexpected {:?}, dropping", node.id, other.kind());
        }
    }
}

async fn handle_load_data(hub: &Arc<ScopeHub>, node: &Arc<Node>, scope_id: String, holder_id: String, responder: &Responder) {
    if !scope_gate(node, &scope_id, responder) {
        return;
    }
    let key = SessionKey::new(&scope_id, &holder_id);
    hub.acquire_session(key, &node.id).await;
    let scope = hub.scopes.get_or_create(&scope_id);
    if scope.is_cached(&holder_id) {
        hub.update_stats(StatsEvent::CacheHits, 1);
    } else {
        hub.update_stats(StatsEvent::CacheMisses, 1);
    }
    match scope.load_data(&holder_id).await {
        Ok(data) => {
            let _ = responder.respond(Packet::UserData {
                scope_id,
                holder_id,
                data: Value::Object(data).to_string(),
            });
        }
        Err(error) => {
            let _ = responder.respond_error(error_code(&error), &error.to_string());
        }
    }
}

async fn handle_save_data(hub: &Arc<ScopeHub>, node: &Arc<Node>, scope_id: String, holder_id: String, data: String, responder: &Responder) {
    if !scope_gate(node, &scope_id, responder) {
        return;
    }
    let key = SessionKey::new(&scope_id, &holder_id);
    match hub.sessions.owner_of(&key).await {
        Some(owner) if owner == node.id => {}
        Some(_) => {
            let _ = responder.respond_error(ErrorCode::SessionAlreadyExists, "session is owned by another node");
            return;
        }
        None => {
            let _ = responder.respond_error(ErrorCode::SessionNotFound, "no session for this holder, load it first");
            return;
        }
    }
    let scope = hub.scopes.get_or_create(&scope_id);
    match scope.set_data_raw(&holder_id, &data).await {
        Ok(()) => {
            let _ = responder.respond_ok("saved");
        }
        Err(error) => {
            let _ = responder.respond_error(error_code(&error), &error.to_string());
        }
    }
}

async fn handle_batch_save(hub: &Arc<ScopeHub>, node: &Arc<Node>, scope_id: String, data: std::collections::BTreeMap<String, String>, responder: &Responder) {
    if !scope_gate(node, &scope_id, responder) {
        return;
    }
    // All-or-nothing: the batch only lands when every holder belongs to the
    // sender.
    for holder_id in data.keys() {
        let key = SessionKey::new(&scope_id, holder_id);
        match hub.sessions.owner_of(&key).await {
            Some(owner) if owner == node.id => {}
            Some(_) => {
                let _ = responder.respond_error(
                    ErrorCode::SessionAlreadyExists,
                    &format!("holder {} is owned by another node", holder_id),
                );
                return;
            }
            None => {
                let _ = responder.respond_error(
                    ErrorCode::SessionNotFound,
                    &format!("no session for holder {}", holder_id),
                );
                return;
            }
        }
    }
    let scope = hub.scopes.get_or_create(&scope_id);
    let count = data.len();
    for (holder_id, payload) in data {
        if let Err(error) = scope.set_data_raw(&holder_id, &payload).await {
            let _ = responder.respond_error(error_code(&error), &error.to_string());
            return;
        }
    }
    let _ = responder.respond_ok(&format!("saved {} holders", count));
}

async fn handle_end_session(hub: &Arc<ScopeHub>, node: &Arc<Node>, scope_id: String, holder_id: String, data: Option<String>, responder: &Responder) {
    if !scope_gate(node, &scope_id, responder) {
        return;
    }
    let key = SessionKey::new(&scope_id, &holder_id);
    if hub.end_session(&key, &node.id, data.as_deref()).await {
        let _ = responder.respond_ok("session ended");
    } else {
        let _ = responder.respond_error(ErrorCode::SessionNotFound, "no session owned by this node");
    }
}

#[allow(clippy::too_many_arguments)]
async fn handle_leaderboard(hub: &Arc<ScopeHub>, node: &Arc<Node>, scope_id: String, field: String, start_from: u32, limit: u32, position_holder_id: Option<String>, responder: &Responder) {
    if !scope_gate(node, &scope_id, responder) {
        return;
    }
    match hub.get_leaderboard(&scope_id, &field, start_from, limit, position_holder_id.as_deref()).await {
        Ok(packet) => {
            let _ = responder.respond(packet);
        }
        Err(error) => {
            let _ = responder.respond_error(error_code(&error), &error.to_string());
        }
    }
}

async fn handle_top_position(hub: &Arc<ScopeHub>, node: &Arc<Node>, scope_id: String, holder_id: String, field: String, responder: &Responder) {
    if !scope_gate(node, &scope_id, responder) {
        return;
    }
    match hub.get_top_position(&scope_id, &holder_id, &field).await {
        Ok(entry) => {
            let _ = responder.respond(Packet::TopPosition { entry });
        }
        Err(error) => {
            let _ = responder.respond_error(error_code(&error), &error.to_string());
        }
    }
}
