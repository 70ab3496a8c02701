use std::sync::Arc;
use ahash::AHashMap;
use parking_lot::Mutex;
use rand::RngExt;
use tokio::sync::oneshot;
use crate::common::structs::custom_error::CustomError;
use crate::protocol::encoding::codec;
use crate::protocol::enums::packet::Packet;
use crate::protocol::enums::packet_kind::PacketKind;
use crate::protocol::enums::receive_result::ReceiveResult;
use crate::protocol::structs::packet_controller::PacketController;
use crate::protocol::structs::packet_waiter::PacketWaiter;
use crate::protocol::structs::reaction::Reaction;
use crate::protocol::structs::transmission::Transmission;

impl PacketController {
    pub fn new() -> PacketController {
        PacketController {
            pending: Arc::new(Mutex::new(AHashMap::new())),
            waiters: Mutex::new(Vec::new()),
        }
    }

    /// Draws a fresh random sequence and registers the transmission under the
    /// sequence its response will carry. The draw avoids both the pending
    /// response keys and their predecessors, so neither this request nor its
    /// reply can shadow an entry already in flight.
    pub fn register(&self, packet: Packet, reaction: Reaction) -> Arc<Transmission> {
        let mut pending = self.pending.lock();
        let sequence = loop {
            let candidate = rand::rng().random::<u16>();
            let expected = candidate.wrapping_add(1);
            if !pending.contains_key(&candidate) && !pending.contains_key(&expected) {
                break candidate;
            }
        };
        let transmission = Arc::new(Transmission::new(sequence, packet, reaction));
        pending.insert(sequence.wrapping_add(1), transmission.clone());
        transmission
    }

    /// Draws a sequence for a fire-and-forget frame without registering it.
    pub(crate) fn allocate_unregistered(&self) -> u16 {
        let pending = self.pending.lock();
        loop {
            let candidate = rand::rng().random::<u16>();
            if !pending.contains_key(&candidate) && !pending.contains_key(&candidate.wrapping_add(1)) {
                return candidate;
            }
        }
    }

    pub fn remove(&self, response_sequence: u16) -> Option<Arc<Transmission>> {
        self.pending.lock().remove(&response_sequence)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.lock().len()
    }

    /// Decodes one frame and routes it: pending transmission first, then
    /// registered waiters, otherwise it is an application request.
    pub(crate) fn receive(&self, data: &[u8]) -> ReceiveResult {
        let (packet, sequence) = match codec::decode(data) {
            Ok(decoded) => decoded,
            Err(error) => return ReceiveResult::Invalid(error),
        };
        let matched = self.pending.lock().remove(&sequence);
        if let Some(transmission) = matched {
            transmission.settle_with_response(packet);
            return ReceiveResult::Response;
        }
        let mut waiters = self.waiters.lock();
        if let Some(position) = waiters.iter().position(|waiter| {
            waiter.kind == packet.kind() && (waiter.predicate)(&packet)
        }) {
            let mut waiter = waiters.remove(position);
            drop(waiters);
            if let Some(sender) = waiter.sender.take() {
                let _ = sender.send(packet);
            }
            return ReceiveResult::Consumed;
        }
        drop(waiters);
        ReceiveResult::Request(packet, sequence)
    }

    /// Suspends the caller until the next unsolicited packet of `kind` that
    /// satisfies `predicate` arrives. Used by flows that do not follow the
    /// request/response shape.
    pub fn wait(
        &self,
        kind: PacketKind,
        predicate: impl Fn(&Packet) -> bool + Send + 'static,
    ) -> oneshot::Receiver<Packet> {
        let (sender, receiver) = oneshot::channel();
        self.waiters.lock().push(PacketWaiter {
            kind,
            predicate: Box::new(predicate),
            sender: Some(sender),
        });
        receiver
    }

    /// Fails every pending transmission and waiter. Timeout tasks are
    /// aborted before this returns.
    pub(crate) fn cancel_all(&self, reason: &str) {
        let drained: Vec<Arc<Transmission>> = {
            let mut pending = self.pending.lock();
            pending.drain().map(|(_, transmission)| transmission).collect()
        };
        for transmission in drained {
            transmission.settle_with_exception(CustomError::new(reason));
        }
        self.waiters.lock().clear();
    }
}

impl Default for PacketController {
    fn default() -> Self {
        PacketController::new()
    }
}
