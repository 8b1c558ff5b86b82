//! Outbound transport contracts.
//!
//! The relay stays transport-agnostic: anything that can carry an addressed
//! event to a queue, or fan a subject and payload out to a cross-process bus,
//! can sit behind these traits.

use crate::error::TransportError;
use crate::event::{Event, Parameters};
use async_trait::async_trait;

/// Hands events to an external message transport for asynchronous delivery.
///
/// Fire-and-forget from the relay's point of view: the relay never consults
/// delivery outcomes, only propagates transport-level send failures.
#[async_trait]
pub trait OutboundEventGateway: Send + Sync {
    /// Enqueue a single addressed event for point-to-point delivery.
    async fn send_event_message(&self, event: Event) -> Result<(), TransportError>;

    /// Publish a whole event on the transport's topic side, unsplit.
    async fn broadcast_event_message(&self, event: Event) -> Result<(), TransportError>;
}

/// Forwards proxied broadcasts to an external pub/sub bus.
///
/// The relay maps an event's subject 1:1 onto the bus topic and its parameter
/// map onto the message body.
#[async_trait]
pub trait BroadcastBridge: Send + Sync {
    /// Post one message on the bus.
    async fn post_event(&self, subject: &str, parameters: &Parameters)
        -> Result<(), TransportError>;
}
