use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use ahash::AHashMap;
use futures_util::{SinkExt, StreamExt};
use log::{debug, error, info, warn};
use parking_lot::RwLock;
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode as WsCloseCode;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use crate::client::enums::client_error::ClientError;
use crate::protocol::enums::error_code::ErrorCode;
use crate::protocol::enums::outbound_message::OutboundMessage;
use crate::protocol::enums::packet::Packet;
use crate::protocol::enums::packet_kind::PacketKind;
use crate::protocol::enums::receive_result::ReceiveResult;
use crate::protocol::structs::leaderboard_entry::LeaderboardEntry;
use crate::protocol::structs::reaction::Reaction;
use crate::protocol::structs::responder::Responder;
use crate::protocol::structs::talker::Talker;
use crate::protocol::types::{complete, completion_slot};

type SessionStore = Arc<RwLock<AHashMap<(String, String), String>>>;

/// One authenticated client connection to a hub.
pub struct NodeClient {
    pub node_name: String,
    pub heartbeat_interval: Duration,
    talker: Arc<Talker>,
    sessions: SessionStore,
    request_timeout: Duration,
}

impl NodeClient {
    /// Connects, waits for the hub's Hello and authenticates. `address` is
    /// `host:port`; the WebSocket endpoint and scheme are derived from it.
    pub async fn connect(
        address: &str,
        use_ssl: bool,
        login: &str,
        password: &str,
        node_name: &str,
    ) -> Result<NodeClient, ClientError> {
        let protocol = if use_ssl { "wss" } else { "ws" };
        let url = format!("{}://{}/access", protocol, address);
        debug!("[CLIENT] Connecting to {}", url);
        let (ws_stream, _) = connect_async(url.as_str()).await
            .map_err(|e| ClientError::ConnectionFailed(e.to_string()))?;
        let (mut write, mut read) = ws_stream.split();

        let (sender, mut outbound) = mpsc::unbounded_channel::<OutboundMessage>();
        let remote_addr = address.parse().unwrap_or_else(|_| "0.0.0.0:0".parse().unwrap());
        let talker = Arc::new(Talker::new(remote_addr, sender));

        tokio::spawn(async move {
            while let Some(message) = outbound.recv().await {
                match message {
                    OutboundMessage::Frame(frame) => {
                        if write.send(Message::Binary(frame.into())).await.is_err() {
                            break;
                        }
                    }
                    OutboundMessage::Close(code, reason) => {
                        let _ = write.send(Message::Close(Some(CloseFrame {
                            code: WsCloseCode::from(code.value()),
                            reason: reason.into(),
                        }))).await;
                        break;
                    }
                }
            }
        });

        let sessions: SessionStore = Default::default();
        // The Hello waiter must exist before the read loop starts pumping.
        let hello = talker.wait(PacketKind::Hello, |_| true);

        let read_talker = talker.clone();
        let read_sessions = sessions.clone();
        tokio::spawn(async move {
            while let Some(message) = read.next().await {
                match message {
                    Ok(Message::Binary(data)) => {
                        handle_inbound(&read_talker, &read_sessions, &data);
                    }
                    Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {}
                    Ok(Message::Close(frame)) => {
                        info!("[CLIENT] Server closed the connection: {:?}", frame);
                        break;
                    }
                    Err(e) => {
                        error!("[CLIENT] WebSocket error: {}", e);
                        break;
                    }
                    _ => {}
                }
            }
            read_talker.close(crate::protocol::enums::close_code::CloseCode::Normal, "connection closed");
        });

        match tokio::time::timeout(Duration::from_secs(10), hello).await {
            Ok(Ok(_)) => {}
            _ => return Err(ClientError::Protocol("no Hello from server".to_string())),
        }

        let client = NodeClient {
            node_name: node_name.to_string(),
            heartbeat_interval: Duration::from_secs(30),
            talker,
            sessions,
            request_timeout: Duration::from_secs(10),
        };
        let ready = client.request(Packet::Auth {
            login: login.to_string(),
            password: password.to_string(),
            node: node_name.to_string(),
        }, PacketKind::Ready).await.map_err(|error| match error {
            ClientError::Timeout => ClientError::AuthRejected("no answer to Auth".to_string()),
            other => ClientError::AuthRejected(other.to_string()),
        })?;
        let heartbeat_interval = match ready {
            Packet::Ready { heartbeat_interval_ms } => Duration::from_millis(heartbeat_interval_ms as u64),
            other => return Err(ClientError::Protocol(format!("expected Ready, got {:?}", other.kind()))),
        };
        info!("[CLIENT] Authenticated as node {} (heartbeat every {:?})", node_name, heartbeat_interval);

        let mut client = client;
        client.heartbeat_interval = heartbeat_interval;
        client.spawn_heartbeat_loop();
        Ok(client)
    }

    fn spawn_heartbeat_loop(&self) {
        let talker = self.talker.clone();
        let interval = self.heartbeat_interval;
        if interval.is_zero() {
            return;
        }
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if !talker.is_open() {
                    return;
                }
                let reaction = Reaction::builder()
                    .on(PacketKind::HeartbeatAck, |_| {})
                    .timeout(interval, || {
                        warn!("[CLIENT] Heartbeat went unanswered");
                    });
                if talker.send(Packet::Heartbeat, reaction).is_err() {
                    return;
                }
            }
        });
    }

    /// One correlated request: resolves with the expected packet, a typed
    /// server error, or a timeout.
    async fn request(&self, packet: Packet, expect: PacketKind) -> Result<Packet, ClientError> {
        let (slot, receiver) = completion_slot::<Result<Packet, ClientError>>();
        let on_expected = slot.clone();
        let on_error = slot.clone();
        let on_other = slot.clone();
        let on_timeout = slot.clone();
        let on_failure = slot;
        let reaction = Reaction::builder()
            .on(expect, move |packet| complete(&on_expected, Ok(packet)))
            .on(PacketKind::Error, move |packet| {
                if let Packet::Error { code, message, .. } = packet {
                    complete(&on_error, Err(ClientError::Server { code, message }));
                }
            })
            .fallback(move |packet| {
                complete(&on_other, Err(ClientError::Protocol(format!("unexpected {:?}", packet.kind()))));
            })
            .timeout(self.request_timeout, move || complete(&on_timeout, Err(ClientError::Timeout)))
            .on_exception(move |error| complete(&on_failure, Err(ClientError::ConnectionFailed(error.to_string()))));
        self.talker.send(packet, reaction)
            .map_err(|error| ClientError::ConnectionFailed(error.to_string()))?;
        receiver.await.unwrap_or(Err(ClientError::ConnectionFailed("connection dropped".to_string())))
    }

    /// Loads holder data, opening (or taking over) the session server-side.
    pub async fn load_data(&self, scope_id: &str, holder_id: &str) -> Result<String, ClientError> {
        let response = self.request(Packet::LoadData {
            scope_id: scope_id.to_string(),
            holder_id: holder_id.to_string(),
        }, PacketKind::UserData).await?;
        match response {
            Packet::UserData { data, .. } => {
                self.sessions.write().insert(
                    (scope_id.to_string(), holder_id.to_string()),
                    data.clone(),
                );
                Ok(data)
            }
            other => Err(ClientError::Protocol(format!("expected UserData, got {:?}", other.kind()))),
        }
    }

    /// Saves holder data through the hub and mirrors it locally.
    pub async fn save_data(&self, scope_id: &str, holder_id: &str, data: &str) -> Result<(), ClientError> {
        self.request(Packet::SaveData {
            scope_id: scope_id.to_string(),
            holder_id: holder_id.to_string(),
            data: data.to_string(),
        }, PacketKind::Ok).await?;
        self.sessions.write().insert(
            (scope_id.to_string(), holder_id.to_string()),
            data.to_string(),
        );
        Ok(())
    }

    /// Updates the local session copy without saving. The hub picks it up
    /// through the next sync barrier or session stop.
    pub fn set_local(&self, scope_id: &str, holder_id: &str, data: &str) {
        self.sessions.write().insert(
            (scope_id.to_string(), holder_id.to_string()),
            data.to_string(),
        );
    }

    /// Ends the session, flushing the local copy as final data.
    pub async fn end_session(&self, scope_id: &str, holder_id: &str) -> Result<(), ClientError> {
        let data = self.sessions.write().remove(&(scope_id.to_string(), holder_id.to_string()));
        self.request(Packet::EndSession {
            scope_id: scope_id.to_string(),
            holder_id: holder_id.to_string(),
            data,
        }, PacketKind::Ok).await?;
        Ok(())
    }

    pub async fn leaderboard(
        &self,
        scope_id: &str,
        field: &str,
        start_from: u32,
        limit: u32,
        position_holder_id: Option<&str>,
    ) -> Result<(Vec<LeaderboardEntry>, Option<LeaderboardEntry>), ClientError> {
        let response = self.request(Packet::RequestLeaderboard {
            scope_id: scope_id.to_string(),
            field: field.to_string(),
            start_from,
            limit,
            position_holder_id: position_holder_id.map(|s| s.to_string()),
        }, PacketKind::Leaderboard).await?;
        match response {
            Packet::Leaderboard { entries, position_entry, .. } => Ok((entries, position_entry)),
            other => Err(ClientError::Protocol(format!("expected Leaderboard, got {:?}", other.kind()))),
        }
    }

    pub async fn top_position(
        &self,
        scope_id: &str,
        holder_id: &str,
        field: &str,
    ) -> Result<Option<LeaderboardEntry>, ClientError> {
        let response = self.request(Packet::RequestTopPosition {
            scope_id: scope_id.to_string(),
            holder_id: holder_id.to_string(),
            field: field.to_string(),
        }, PacketKind::TopPosition).await?;
        match response {
            Packet::TopPosition { entry } => Ok(entry),
            other => Err(ClientError::Protocol(format!("expected TopPosition, got {:?}", other.kind()))),
        }
    }

    pub fn is_open(&self) -> bool {
        self.talker.is_open()
    }

    pub fn close(&self) {
        self.talker.close(crate::protocol::enums::close_code::CloseCode::Normal, "client closing");
    }
}

/// Answers the hub's session-management requests from the local store.
fn handle_inbound(talker: &Arc<Talker>, sessions: &SessionStore, data: &[u8]) {
    match talker.receive(data) {
        ReceiveResult::Response | ReceiveResult::Consumed | ReceiveResult::Ignored => {}
        ReceiveResult::Invalid(error) => {
            debug!("[CLIENT] Dropping undecodable frame: {}", error);
        }
        ReceiveResult::Request(packet, sequence) => {
            let responder = Responder::new(talker.clone(), sequence);
            match packet {
                Packet::StopSession { scope_id, holder_id } => {
                    let data = sessions.write().remove(&(scope_id.clone(), holder_id.clone()));
                    let _ = responder.respond(Packet::EndSession { scope_id, holder_id, data });
                }
                Packet::RequestSync { scope_id } => {
                    let flushed: BTreeMap<String, String> = sessions.read().iter()
                        .filter(|((scope, _), _)| *scope == scope_id)
                        .map(|((_, holder), data)| (holder.clone(), data.clone()))
                        .collect();
                    let _ = responder.respond(Packet::BatchSaveData { scope_id, data: flushed });
                }
                other => {
                    let _ = responder.respond_error(ErrorCode::Unknown, &format!("unhandled {:?}", other.kind()));
                }
            }
        }
    }
}
