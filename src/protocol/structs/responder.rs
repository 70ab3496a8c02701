use std::sync::Arc;
use crate::protocol::structs::talker::Talker;

/// Capability to answer one inbound request over its originating talker,
/// using the `request sequence + 1` correlation rule.
#[derive(Clone)]
pub struct Responder {
    pub(crate) talker: Arc<Talker>,
    pub(crate) request_sequence: u16,
}
