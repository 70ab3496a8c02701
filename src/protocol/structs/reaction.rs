use std::time::Duration;
use crate::protocol::enums::packet_kind::PacketKind;
use crate::protocol::types::{ExceptionHandler, ResponseHandler, TimeoutHandler};

/// The compiled handler set attached to a transmission.
///
/// Typed handlers are tried first-match in declaration order, the fallback
/// catches everything else, and each declared timeout duration gets its own
/// scheduled task. Built through [`ReactionBuilder`].
pub struct Reaction {
    pub(crate) handlers: Vec<(PacketKind, ResponseHandler)>,
    pub(crate) fallback: Option<ResponseHandler>,
    pub(crate) timeouts: Vec<(Duration, TimeoutHandler)>,
    pub(crate) exception: Option<ExceptionHandler>,
}

/// Builder collecting handlers before they are compiled into a [`Reaction`].
#[derive(Default)]
pub struct ReactionBuilder {
    pub(crate) handlers: Vec<(PacketKind, ResponseHandler)>,
    pub(crate) fallback: Option<ResponseHandler>,
    pub(crate) timeouts: Vec<(Duration, TimeoutHandler)>,
    pub(crate) exception: Option<ExceptionHandler>,
}
