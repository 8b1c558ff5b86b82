//! Error types for relay operations.

use crate::listener::ListenerError;
use thiserror::Error;

/// Errors raised by outbound transports (gateway and bridge implementations).
#[derive(Debug, Error)]
pub enum TransportError {
    /// The transport refused or failed to accept the message.
    #[error("send failed: {0}")]
    Send(String),

    /// The transport endpoint is gone.
    #[error("channel closed: {0}")]
    Closed(String),

    /// The event could not be encoded for the wire.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Errors surfaced by the relay's public entry points.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The event fails the relay's input contract (empty subject).
    #[error("invalid event: {0}")]
    InvalidEvent(String),

    /// A listener failed on the queue path, where failures propagate.
    #[error(transparent)]
    Listener(#[from] ListenerError),

    /// A gateway or bridge call failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
