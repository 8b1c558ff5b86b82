//! Broadcast-channel bridge.

use async_trait::async_trait;
use eventrelay_core::{BroadcastBridge, Parameters, TransportError};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// Message shape on the bridge's bus: the event's subject as topic, its
/// parameter map as body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BridgeMessage {
    pub topic: String,
    pub body: Parameters,
}

/// Bridge that fans proxied broadcasts out over a `tokio::sync::broadcast`
/// channel. Every live subscriber sees every message.
#[derive(Clone)]
pub struct BroadcastChannelBridge {
    tx: broadcast::Sender<BridgeMessage>,
}

impl BroadcastChannelBridge {
    /// Create a bridge whose bus buffers up to `capacity` messages per
    /// subscriber before lagging ones start losing the oldest.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Attach a new subscriber. Only messages posted after this call are
    /// observed.
    pub fn subscribe(&self) -> broadcast::Receiver<BridgeMessage> {
        self.tx.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

#[async_trait]
impl BroadcastBridge for BroadcastChannelBridge {
    async fn post_event(
        &self,
        subject: &str,
        parameters: &Parameters,
    ) -> Result<(), TransportError> {
        debug!(topic = subject, "posting proxied broadcast on bus");
        let message = BridgeMessage {
            topic: subject.to_string(),
            body: parameters.clone(),
        };
        // A bus with no subscribers is not a delivery failure.
        let _ = self.tx.send(message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params() -> Parameters {
        let mut parameters = Parameters::new();
        parameters.insert("order_id".to_string(), json!(42));
        parameters
    }

    #[tokio::test]
    async fn every_subscriber_sees_the_post() {
        let bridge = BroadcastChannelBridge::new(8);
        let mut first = bridge.subscribe();
        let mut second = bridge.subscribe();

        bridge.post_event("order.created", &params()).await.unwrap();

        let expected = BridgeMessage {
            topic: "order.created".to_string(),
            body: params(),
        };
        assert_eq!(first.recv().await.unwrap(), expected);
        assert_eq!(second.recv().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn posting_without_subscribers_is_fine() {
        let bridge = BroadcastChannelBridge::new(8);
        assert_eq!(bridge.subscriber_count(), 0);
        bridge.post_event("order.created", &params()).await.unwrap();
    }
}
