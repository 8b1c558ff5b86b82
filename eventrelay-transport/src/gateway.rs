//! Channel-backed outbound gateway.

use async_trait::async_trait;
use eventrelay_core::{Event, OutboundEventGateway, TransportError};
use tokio::sync::mpsc;
use tracing::debug;

/// Gateway that hands events to in-process channels.
///
/// The queue side and the topic side each get their own unbounded channel;
/// whatever consumes the receivers plays the role of the external message
/// transport (and owns redelivery for queued messages).
#[derive(Clone)]
pub struct ChannelEventGateway {
    queue_tx: mpsc::UnboundedSender<Event>,
    topic_tx: mpsc::UnboundedSender<Event>,
}

/// Consumer ends of a [`ChannelEventGateway`].
pub struct EventChannels {
    /// Addressed point-to-point messages, in send order.
    pub queue: mpsc::UnboundedReceiver<Event>,
    /// Unsplit broadcast messages, in send order.
    pub topic: mpsc::UnboundedReceiver<Event>,
}

impl ChannelEventGateway {
    /// Create a gateway and the channels it feeds.
    pub fn new() -> (Self, EventChannels) {
        let (queue_tx, queue_rx) = mpsc::unbounded_channel();
        let (topic_tx, topic_rx) = mpsc::unbounded_channel();
        (
            Self { queue_tx, topic_tx },
            EventChannels {
                queue: queue_rx,
                topic: topic_rx,
            },
        )
    }
}

#[async_trait]
impl OutboundEventGateway for ChannelEventGateway {
    async fn send_event_message(&self, event: Event) -> Result<(), TransportError> {
        debug!(subject = %event.subject(), "enqueueing addressed event");
        self.queue_tx
            .send(event)
            .map_err(|_| TransportError::Closed("queue consumer dropped".to_string()))
    }

    async fn broadcast_event_message(&self, event: Event) -> Result<(), TransportError> {
        debug!(subject = %event.subject(), "publishing topic event");
        self.topic_tx
            .send(event)
            .map_err(|_| TransportError::Closed("topic consumer dropped".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn queue_and_topic_sides_are_separate() {
        let (gateway, mut channels) = ChannelEventGateway::new();

        gateway
            .send_event_message(Event::new("order.created"))
            .await
            .unwrap();
        gateway
            .broadcast_event_message(Event::new("order.cancelled"))
            .await
            .unwrap();

        assert_eq!(channels.queue.recv().await.unwrap().subject(), "order.created");
        assert_eq!(channels.topic.recv().await.unwrap().subject(), "order.cancelled");
    }

    #[tokio::test]
    async fn dropped_consumer_surfaces_as_closed() {
        let (gateway, channels) = ChannelEventGateway::new();
        drop(channels);

        let result = gateway.send_event_message(Event::new("order.created")).await;
        assert!(matches!(result, Err(TransportError::Closed(_))));
    }
}
