use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix::{Actor, ActorContext, AsyncContext, StreamHandler};
use actix_web_actors::ws;
use log::{debug, warn};
use parking_lot::RwLock;
use tokio::sync::mpsc;
use crate::access::access::authenticate_connection;
use crate::access::structs::access_connection::AccessConnection;
use crate::access::structs::outbound_stream::OutboundStream;
use crate::hub::structs::scope_hub::ScopeHub;
use crate::node::handler::handle_node_packet;
use crate::protocol::enums::close_code::CloseCode;
use crate::protocol::enums::outbound_message::OutboundMessage;
use crate::protocol::enums::packet::Packet;
use crate::protocol::enums::receive_result::ReceiveResult;
use crate::protocol::structs::responder::Responder;
use crate::protocol::structs::talker::Talker;
use crate::stats::enums::stats_event::StatsEvent;

impl AccessConnection {
    pub fn new(hub: Arc<ScopeHub>, remote_addr: SocketAddr) -> Self {
        Self {
            hub,
            remote_addr,
            talker: None,
            node: Arc::new(RwLock::new(None)),
        }
    }

    fn handle_frame(&mut self, data: &[u8]) {
        let Some(talker) = self.talker.clone() else { return; };
        // Rate limiting happens before any decode.
        if !self.hub.limiter.acquire(self.remote_addr.ip()) {
            self.hub.update_stats(StatsEvent::RateLimited, 1);
            talker.close_with_block(CloseCode::RateLimited, "too many requests");
            return;
        }
        self.hub.update_stats(StatsEvent::PacketsReceived, 1);
        match talker.receive(data) {
            ReceiveResult::Response | ReceiveResult::Consumed | ReceiveResult::Ignored => {}
            ReceiveResult::Invalid(error) => {
                self.hub.update_stats(StatsEvent::ProtocolErrors, 1);
                debug!("[ACCESS] Dropping undecodable frame from {}: {}", self.remote_addr, error);
            }
            ReceiveResult::Request(packet, sequence) => {
                let responder = Responder::new(talker.clone(), sequence);
                let authenticated = self.node.read().clone();
                match authenticated {
                    Some(node) => {
                        // Every unsolicited request gets its own worker task
                        // so a slow handler never stalls this receive loop.
                        let hub = self.hub.clone();
                        tokio::spawn(handle_node_packet(hub, node, packet, responder));
                    }
                    None => self.handle_unauthenticated(talker, packet, responder),
                }
            }
        }
    }

    fn handle_unauthenticated(&mut self, talker: Arc<Talker>, packet: Packet, responder: Responder) {
        match packet {
            Packet::Auth { login, password, node } => {
                let hub = self.hub.clone();
                let slot = self.node.clone();
                let remote_addr = self.remote_addr;
                tokio::spawn(async move {
                    authenticate_connection(hub, talker, slot, remote_addr, login, password, node, responder).await;
                });
            }
            other => {
                warn!("[ACCESS] {} sent {:?} before authenticating", self.remote_addr, other.kind());
                talker.close(CloseCode::NotAuthenticated, "authenticate first");
            }
        }
    }
}

impl Actor for AccessConnection {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        debug!("[ACCESS] New connection from {}", self.remote_addr);
        self.hub.update_stats(StatsEvent::ConnectionsActive, 1);
        let (sender, receiver) = mpsc::unbounded_channel();
        ctx.add_stream(OutboundStream(receiver));
        let talker = Arc::new(Talker::new(self.remote_addr, sender));
        if let Err(error) = talker.notify(Packet::Hello) {
            warn!("[ACCESS] Could not greet {}: {}", self.remote_addr, error);
        }
        self.talker = Some(talker);

        // A connection that never authenticates is not kept around.
        let auth_timeout = Duration::from_secs(self.hub.config.access_server.auth_timeout);
        ctx.run_later(auth_timeout, |act, _ctx| {
            if act.node.read().is_none() {
                if let Some(talker) = act.talker.as_ref() {
                    talker.close(CloseCode::AuthenticationTimeout, "authentication timed out");
                }
            }
        });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.hub.update_stats(StatsEvent::ConnectionsActive, -1);
        let node = self.node.write().take();
        if let Some(talker) = self.talker.take() {
            // Pending timeouts die with the connection either way.
            talker.close(CloseCode::Normal, "connection closed");
        }
        if let Some(node) = node {
            debug!("[ACCESS] Node {} disconnected", node.id);
            let hub = self.hub.clone();
            tokio::spawn(async move {
                hub.disconnect_node(&node, CloseCode::Normal, "connection closed").await;
            });
        }
        debug!("[ACCESS] Connection from {} stopped", self.remote_addr);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for AccessConnection {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Binary(data)) => {
                self.handle_frame(&data);
            }
            Ok(ws::Message::Ping(payload)) => {
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {}
            Ok(ws::Message::Text(_)) => {
                warn!("[ACCESS] {} sent a text frame on a binary protocol", self.remote_addr);
            }
            Ok(ws::Message::Close(reason)) => {
                debug!("[ACCESS] Close received from {}: {:?}", self.remote_addr, reason);
                ctx.stop();
            }
            Err(error) => {
                warn!("[ACCESS] WebSocket error from {}: {}", self.remote_addr, error);
                ctx.stop();
            }
            _ => {}
        }
    }
}

impl StreamHandler<OutboundMessage> for AccessConnection {
    fn handle(&mut self, msg: OutboundMessage, ctx: &mut Self::Context) {
        match msg {
            OutboundMessage::Frame(frame) => {
                self.hub.update_stats(StatsEvent::PacketsSent, 1);
                ctx.binary(frame);
            }
            OutboundMessage::Close(code, reason) => {
                let close_code = match code {
                    CloseCode::Normal => ws::CloseCode::Normal,
                    other => ws::CloseCode::Other(other.value()),
                };
                ctx.close(Some(ws::CloseReason {
                    code: close_code,
                    description: Some(reason),
                }));
                ctx.stop();
            }
        }
    }
}
