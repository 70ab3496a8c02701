use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::Ordering;
use std::time::Duration;
use log::error;
use parking_lot::Mutex;
use tokio::sync::Notify;
use crate::common::structs::custom_error::CustomError;
use crate::protocol::enums::packet::Packet;
use crate::protocol::structs::reaction::Reaction;
use crate::protocol::structs::transmission::Transmission;

impl Transmission {
    pub(crate) fn new(sequence: u16, packet: Packet, reaction: Reaction) -> Transmission {
        Transmission {
            sequence,
            packet,
            reaction: Mutex::new(reaction),
            received: std::sync::atomic::AtomicBool::new(false),
            timeout_tasks: Mutex::new(Vec::new()),
            settled_notify: Notify::new(),
        }
    }

    pub fn is_settled(&self) -> bool {
        self.received.load(Ordering::SeqCst)
    }

    /// Flips the settlement gate. Returns true for exactly one caller.
    fn try_settle(&self) -> bool {
        !self.received.swap(true, Ordering::SeqCst)
    }

    pub(crate) fn abort_timeouts(&self) {
        for handle in self.timeout_tasks.lock().drain(..) {
            handle.abort();
        }
    }

    /// Response path. A packet arriving after settlement has no effect.
    pub(crate) fn settle_with_response(&self, packet: Packet) {
        if !self.try_settle() {
            return;
        }
        self.abort_timeouts();
        let mut reaction = self.reaction.lock();
        if let Err(panic) = catch_unwind(AssertUnwindSafe(|| reaction.handle_response(packet))) {
            error!("[PROTOCOL] Response handler for sequence {} panicked: {:?}", self.sequence, panic);
            reaction.handle_exception(CustomError::new("response handler panicked"));
        }
        drop(reaction);
        self.settled_notify.notify_waiters();
    }

    /// Timeout path. Advisory (non-final) timeouts run their handler without
    /// settling; the final timeout settles and abandons the request.
    /// Returns whether the transmission was settled by this call.
    pub(crate) fn settle_with_timeout(&self, after: Duration) -> bool {
        let is_final = self.reaction.lock().is_final_timeout(after);
        if !is_final {
            if !self.is_settled() {
                self.reaction.lock().handle_timeout(after);
            }
            return false;
        }
        if !self.try_settle() {
            return false;
        }
        self.abort_timeouts();
        self.reaction.lock().handle_timeout(after);
        self.settled_notify.notify_waiters();
        true
    }

    pub(crate) fn settle_with_exception(&self, error: CustomError) {
        if !self.try_settle() {
            return;
        }
        self.abort_timeouts();
        self.reaction.lock().handle_exception(error);
        self.settled_notify.notify_waiters();
    }

    /// Suspends until the transmission settles by response, timeout or
    /// exception.
    pub async fn settled(&self) {
        loop {
            let notified = self.settled_notify.notified();
            if self.is_settled() {
                return;
            }
            notified.await;
        }
    }
}
