//! Event relay: routes events to listeners, splits them for queued delivery,
//! and bridges proxied broadcasts to an external bus.

use crate::config::RedeliveryPolicy;
use crate::error::RelayError;
use crate::event::Event;
use crate::gateway::{BroadcastBridge, OutboundEventGateway};
use crate::listener::EventListener;
use crate::registry::ListenerRegistry;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Stateless, reentrant event dispatcher.
///
/// The relay owns no event history and no listener state; it holds only its
/// collaborators. Every dispatch runs entirely on the calling task: listener
/// invocations and retries are awaited sequentially, with no internal
/// spawning, timeouts, or backoff. Asynchronous hand-off, if any, lives
/// behind the [`OutboundEventGateway`] and [`BroadcastBridge`] collaborators.
pub struct EventRelay {
    registry: Arc<dyn ListenerRegistry>,
    policy: Arc<dyn RedeliveryPolicy>,
    gateway: Arc<dyn OutboundEventGateway>,
    bridge: Arc<dyn BroadcastBridge>,
}

impl EventRelay {
    pub fn new(
        registry: Arc<dyn ListenerRegistry>,
        policy: Arc<dyn RedeliveryPolicy>,
        gateway: Arc<dyn OutboundEventGateway>,
        bridge: Arc<dyn BroadcastBridge>,
    ) -> Self {
        Self {
            registry,
            policy,
            gateway,
            bridge,
        }
    }

    /// Relay a queue (point-to-point) event to the single listener named by
    /// its destination parameter.
    ///
    /// Events without a destination are dropped silently: queue delivery is
    /// point-to-point by definition. A listener failure propagates unmodified
    /// and the destination parameter stays on the event, so a redelivered
    /// message still routes correctly; retry on this path belongs to the
    /// external transport.
    pub async fn relay_queue_event(&self, event: &Event) -> Result<(), RelayError> {
        validate(event)?;

        let Some(destination) = event.destination() else {
            debug!(
                subject = %event.subject(),
                "queue event carries no destination, dropping"
            );
            return Ok(());
        };

        let listeners = self.registry.listeners(event.subject());
        match listeners
            .iter()
            .find(|listener| listener.identifier() == destination)
        {
            Some(listener) => {
                debug!(
                    subject = %event.subject(),
                    listener = listener.identifier(),
                    "relaying queue event"
                );
                listener.handle(event).await?;
                Ok(())
            }
            None => {
                warn!(
                    subject = %event.subject(),
                    destination,
                    "no listener registered under the event's destination"
                );
                Ok(())
            }
        }
    }

    /// Relay a topic (broadcast) event to every listener registered for its
    /// subject, with bounded per-listener redelivery.
    ///
    /// Events flagged for proxying skip local listeners entirely and go to
    /// the broadcast bridge. Otherwise each listener is attempted in registry
    /// order; a listener that keeps failing past the redelivery bound is
    /// logged and skipped, never blocking delivery to the listeners after it.
    /// The call completes without error even if every listener fails.
    pub async fn relay_topic_event(&self, event: &Event) -> Result<(), RelayError> {
        validate(event)?;

        if event.is_broadcast_proxy() {
            debug!(subject = %event.subject(), "forwarding proxied broadcast to bridge");
            self.bridge
                .post_event(event.subject(), event.parameters())
                .await?;
            return Ok(());
        }

        // Read fresh per dispatch so policy changes apply to the next event.
        let max_redelivery = self.policy.max_redelivery_count();

        for listener in self.registry.listeners(event.subject()) {
            self.dispatch_with_redelivery(listener.as_ref(), event, max_redelivery)
                .await;
        }
        Ok(())
    }

    /// Split a topic event into one addressed copy per registered listener
    /// and hand each copy to the outbound gateway.
    ///
    /// The original event is never mutated; each copy carries a fresh
    /// parameter map with the destination set to one listener's identifier.
    /// A subject with no listeners produces no gateway calls.
    pub async fn send_event_message(&self, event: &Event) -> Result<(), RelayError> {
        validate(event)?;

        for listener in self.registry.listeners(event.subject()) {
            let addressed = event.copy_with_destination(listener.identifier());
            debug!(
                subject = %event.subject(),
                destination = listener.identifier(),
                "queueing addressed copy"
            );
            self.gateway.send_event_message(addressed).await?;
        }
        Ok(())
    }

    /// Publish a whole event on the gateway's topic side, unsplit.
    pub async fn broadcast_event_message(&self, event: &Event) -> Result<(), RelayError> {
        validate(event)?;
        self.gateway.broadcast_event_message(event.clone()).await?;
        Ok(())
    }

    /// One listener's share of a broadcast: the initial attempt plus up to
    /// `max_redelivery` retries, sequential, on the same event instance.
    /// Exhausted failures are swallowed here so one listener cannot poison
    /// the broadcast for the rest.
    async fn dispatch_with_redelivery(
        &self,
        listener: &dyn EventListener,
        event: &Event,
        max_redelivery: u32,
    ) {
        let mut attempt: u32 = 0;
        loop {
            match listener.handle(event).await {
                Ok(()) => return,
                Err(err) if attempt < max_redelivery => {
                    attempt += 1;
                    debug!(
                        subject = %event.subject(),
                        listener = listener.identifier(),
                        attempt,
                        %err,
                        "listener failed, redelivering"
                    );
                }
                Err(err) => {
                    error!(
                        subject = %event.subject(),
                        listener = listener.identifier(),
                        attempts = attempt + 1,
                        %err,
                        "listener exhausted redelivery attempts, giving up"
                    );
                    return;
                }
            }
        }
    }
}

fn validate(event: &Event) -> Result<(), RelayError> {
    if event.subject().is_empty() {
        return Err(RelayError::InvalidEvent(
            "event subject must not be empty".to_string(),
        ));
    }
    Ok(())
}
