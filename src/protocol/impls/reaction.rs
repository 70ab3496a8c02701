use std::time::Duration;
use log::debug;
use crate::common::structs::custom_error::CustomError;
use crate::protocol::enums::packet::Packet;
use crate::protocol::enums::packet_kind::PacketKind;
use crate::protocol::structs::reaction::{Reaction, ReactionBuilder};

impl Reaction {
    pub fn builder() -> ReactionBuilder {
        ReactionBuilder::default()
    }

    /// Runs the first typed handler matching the packet's kind, falling back
    /// to the default handler. Unmatched packets are dropped.
    pub(crate) fn handle_response(&mut self, packet: Packet) {
        let kind = packet.kind();
        for (declared, handler) in self.handlers.iter_mut() {
            if *declared == kind {
                handler(packet);
                return;
            }
        }
        match self.fallback.as_mut() {
            Some(fallback) => fallback(packet),
            None => debug!("[PROTOCOL] Response {:?} had no matching handler", kind),
        }
    }

    pub(crate) fn handle_timeout(&mut self, after: Duration) {
        for (declared, handler) in self.timeouts.iter_mut() {
            if *declared == after {
                handler();
                return;
            }
        }
    }

    pub(crate) fn handle_exception(&mut self, error: CustomError) {
        match self.exception.as_mut() {
            Some(handler) => handler(error),
            None => debug!("[PROTOCOL] Transmission failed without exception handler: {}", error),
        }
    }

    /// Whether this duration is the last line of defense; only the longest
    /// declared timeout settles the transmission, shorter ones are advisory.
    pub(crate) fn is_final_timeout(&self, after: Duration) -> bool {
        match self.timeouts.iter().map(|(duration, _)| *duration).max() {
            Some(longest) => after >= longest,
            None => true,
        }
    }
}

impl ReactionBuilder {
    pub fn new() -> ReactionBuilder {
        ReactionBuilder::default()
    }

    /// Declares a typed handler. Handlers are tried first-match in the order
    /// they were declared.
    pub fn on(mut self, kind: PacketKind, handler: impl FnMut(Packet) + Send + 'static) -> Self {
        self.handlers.push((kind, Box::new(handler)));
        self
    }

    /// Declares the handler used when no typed handler matches.
    pub fn fallback(mut self, handler: impl FnMut(Packet) + Send + 'static) -> Self {
        self.fallback = Some(Box::new(handler));
        self
    }

    /// Declares a timeout handler. Multiple durations may be declared; the
    /// longest one abandons the request, the earlier ones fire as warnings
    /// while the request keeps waiting.
    pub fn timeout(mut self, after: Duration, handler: impl FnMut() + Send + 'static) -> Self {
        self.timeouts.push((after, Box::new(handler)));
        self
    }

    pub fn on_exception(mut self, handler: impl FnMut(CustomError) + Send + 'static) -> Self {
        self.exception = Some(Box::new(handler));
        self
    }

    pub(crate) fn timeout_durations(&self) -> Vec<Duration> {
        self.timeouts.iter().map(|(duration, _)| *duration).collect()
    }

    pub fn build(self) -> Reaction {
        Reaction {
            handlers: self.handlers,
            fallback: self.fallback,
            timeouts: self.timeouts,
            exception: self.exception,
        }
    }
}
