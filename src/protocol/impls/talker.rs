use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::oneshot;
use crate::common::structs::custom_error::CustomError;
use crate::protocol::encoding::codec;
use crate::protocol::enums::close_code::CloseCode;
use crate::protocol::enums::outbound_message::OutboundMessage;
use crate::protocol::enums::packet::Packet;
use crate::protocol::enums::packet_kind::PacketKind;
use crate::protocol::enums::receive_result::ReceiveResult;
use crate::protocol::structs::packet_controller::PacketController;
use crate::protocol::structs::reaction::ReactionBuilder;
use crate::protocol::structs::talker::{ConnectionState, Talker};
use crate::protocol::structs::transmission::Transmission;

impl Talker {
    pub fn new(remote_addr: SocketAddr, outbound: UnboundedSender<OutboundMessage>) -> Talker {
        Talker {
            remote_addr,
            state: Arc::new(ConnectionState {
                open: AtomicBool::new(true),
                blocked: AtomicBool::new(false),
                outbound,
            }),
            controller: PacketController::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.open.load(Ordering::SeqCst)
    }

    pub fn is_blocked(&self) -> bool {
        self.state.blocked.load(Ordering::SeqCst)
    }

    /// Sends a correlated request. The returned transmission settles exactly
    /// once: by response, by its final timeout, or by exception.
    pub fn send(&self, packet: Packet, reaction: ReactionBuilder) -> Result<Arc<Transmission>, CustomError> {
        if !self.is_open() {
            return Err(CustomError::new("connection is closed"));
        }
        let durations = reaction.timeout_durations();
        let transmission = self.controller.register(packet, reaction.build());
        let response_key = transmission.sequence.wrapping_add(1);
        let frame = match codec::encode(&transmission.packet, transmission.sequence) {
            Ok(frame) => frame,
            Err(error) => {
                self.controller.remove(response_key);
                transmission.settle_with_exception(CustomError::new(&error.to_string()));
                return Err(CustomError::new(&error.to_string()));
            }
        };
        for after in durations {
            let pending = self.controller.pending.clone();
            let state = self.state.clone();
            let task_transmission = transmission.clone();
            let handle = tokio::spawn(async move {
                tokio::time::sleep(after).await;
                if !state.open.load(Ordering::SeqCst) {
                    return;
                }
                if task_transmission.settle_with_timeout(after) {
                    pending.lock().remove(&response_key);
                }
            });
            transmission.timeout_tasks.lock().push(handle);
        }
        if self.state.outbound.send(OutboundMessage::Frame(frame)).is_err() {
            self.controller.remove(response_key);
            transmission.settle_with_exception(CustomError::new("connection writer is gone"));
            return Err(CustomError::new("connection writer is gone"));
        }
        Ok(transmission)
    }

    /// Sends a fire-and-forget frame that expects no response.
    pub fn notify(&self, packet: Packet) -> Result<(), CustomError> {
        if !self.is_open() {
            return Err(CustomError::new("connection is closed"));
        }
        let sequence = self.controller.allocate_unregistered();
        let frame = codec::encode(&packet, sequence)
            .map_err(|error| CustomError::new(&error.to_string()))?;
        self.state.outbound.send(OutboundMessage::Frame(frame))
            .map_err(|_| CustomError::new("connection writer is gone"))
    }

    /// Answers an inbound request using the `request sequence + 1` rule.
    pub fn respond(&self, request_sequence: u16, packet: Packet) -> Result<(), CustomError> {
        if !self.is_open() {
            return Err(CustomError::new("connection is closed"));
        }
        let frame = codec::encode(&packet, request_sequence.wrapping_add(1))
            .map_err(|error| CustomError::new(&error.to_string()))?;
        self.state.outbound.send(OutboundMessage::Frame(frame))
            .map_err(|_| CustomError::new("connection writer is gone"))
    }

    /// Feeds inbound bytes through decode and correlation. Blocked talkers
    /// discard everything unread.
    pub fn receive(&self, data: &[u8]) -> ReceiveResult {
        if self.is_blocked() {
            return ReceiveResult::Ignored;
        }
        self.controller.receive(data)
    }

    pub fn wait(
        &self,
        kind: PacketKind,
        predicate: impl Fn(&Packet) -> bool + Send + 'static,
    ) -> oneshot::Receiver<Packet> {
        self.controller.wait(kind, predicate)
    }

    /// Closes the connection. Every pending timeout task is cancelled and
    /// every pending transmission fails before this returns, so nothing can
    /// observe a half-torn-down connection afterwards.
    pub fn close(&self, code: CloseCode, reason: &str) {
        if self.state.open.swap(false, Ordering::SeqCst) {
            self.controller.cancel_all("connection closed");
            let _ = self.state.outbound.send(OutboundMessage::Close(code, reason.to_string()));
        }
    }

    /// Closes and additionally flags the talker so bytes still in flight from
    /// the peer are ignored while the transport drains.
    pub fn close_with_block(&self, code: CloseCode, reason: &str) {
        self.state.blocked.store(true, Ordering::SeqCst);
        self.close(code, reason);
    }
}
