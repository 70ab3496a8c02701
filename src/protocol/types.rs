use crate::common::structs::custom_error::CustomError;
use crate::protocol::enums::packet::Packet;

/// Handler invoked with the decoded response packet.
pub type ResponseHandler = Box<dyn FnMut(Packet) + Send>;

/// Handler invoked when a declared timeout elapses unanswered.
pub type TimeoutHandler = Box<dyn FnMut() + Send>;

/// Handler invoked when a transmission fails outside the reply path.
pub type ExceptionHandler = Box<dyn FnMut(CustomError) + Send>;

/// Predicate deciding whether a waiter consumes an unsolicited packet.
pub type WaitPredicate = Box<dyn Fn(&Packet) -> bool + Send>;

/// A one-shot completion shared between several reaction handlers; whichever
/// path settles first consumes the sender.
pub type CompletionSlot<T> = std::sync::Arc<parking_lot::Mutex<Option<tokio::sync::oneshot::Sender<T>>>>;

pub fn completion_slot<T>() -> (CompletionSlot<T>, tokio::sync::oneshot::Receiver<T>) {
    let (sender, receiver) = tokio::sync::oneshot::channel();
    (std::sync::Arc::new(parking_lot::Mutex::new(Some(sender))), receiver)
}

pub fn complete<T>(slot: &CompletionSlot<T>, value: T) {
    if let Some(sender) = slot.lock().take() {
        let _ = sender.send(value);
    }
}
