//! In-process transports for the eventrelay core.
//!
//! Channel-backed implementations of the two outbound contracts the relay
//! dispatches through:
//!
//! - [`ChannelEventGateway`] - `mpsc`-backed [`OutboundEventGateway`] with
//!   separate queue and topic channels
//! - [`BroadcastChannelBridge`] - `broadcast`-backed [`BroadcastBridge`] for
//!   proxied cross-process events
//!
//! Both are meant for single-process deployments and tests; a broker-backed
//! transport implements the same traits against a real bus.
//!
//! [`OutboundEventGateway`]: eventrelay_core::OutboundEventGateway
//! [`BroadcastBridge`]: eventrelay_core::BroadcastBridge

pub mod bridge;
pub mod gateway;

pub use bridge::{BridgeMessage, BroadcastChannelBridge};
pub use gateway::{ChannelEventGateway, EventChannels};
