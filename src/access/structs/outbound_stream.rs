use std::pin::Pin;
use std::task::{Context, Poll};
use futures_util::Stream;
use tokio::sync::mpsc::UnboundedReceiver;
use crate::protocol::enums::outbound_message::OutboundMessage;

/// Adapts the talker's outbound channel into a stream the actor context can
/// consume.
pub struct OutboundStream(pub UnboundedReceiver<OutboundMessage>);

impl Stream for OutboundStream {
    type Item = OutboundMessage;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.0.poll_recv(cx)
    }
}
