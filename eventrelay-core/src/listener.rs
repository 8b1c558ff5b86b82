//! Listener capability exposed to the relay.

use crate::event::Event;
use async_trait::async_trait;
use thiserror::Error;

/// A registered event listener.
///
/// The relay holds only a transient reference to a listener during a single
/// dispatch; listener state is owned by the registrant.
#[async_trait]
pub trait EventListener: Send + Sync {
    /// Stable identifier, unique per registration within a subject.
    fn identifier(&self) -> &str;

    /// Handle one event. Failures on the topic path are retried up to the
    /// redelivery bound; failures on the queue path propagate to the caller.
    async fn handle(&self, event: &Event) -> Result<(), ListenerError>;
}

/// Error raised by a listener while handling an event.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The listener attempted to process the event and failed.
    #[error("listener failed: {0}")]
    Failed(String),

    /// The listener refused the event outright.
    #[error("event rejected: {0}")]
    Rejected(String),
}
