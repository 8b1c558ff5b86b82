//! In-process event relay.
//!
//! Routes named events ("subjects") to registered listeners with two delivery
//! modes, plus a bridge to an external broadcast bus:
//!
//! - **Queue (addressed) delivery** - point-to-point dispatch to exactly one
//!   named listener, no relay-side retry
//!   ([`EventRelay::relay_queue_event`]).
//! - **Topic (broadcast) delivery** - dispatch to every listener registered
//!   for a subject, with bounded per-listener redelivery and failure
//!   isolation ([`EventRelay::relay_topic_event`]).
//! - **Splitting** - fan a topic event out into one addressed copy per
//!   listener for external queuing ([`EventRelay::send_event_message`]).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use eventrelay_core::*;
//! use async_trait::async_trait;
//! use std::sync::Arc;
//!
//! struct BillingListener;
//!
//! #[async_trait]
//! impl EventListener for BillingListener {
//!     fn identifier(&self) -> &str {
//!         "billing"
//!     }
//!
//!     async fn handle(&self, event: &Event) -> Result<(), ListenerError> {
//!         println!("charging order {:?}", event.parameters().get("order_id"));
//!         Ok(())
//!     }
//! }
//!
//! let registry = Arc::new(EventListenerRegistry::new());
//! registry.register("order.created", Arc::new(BillingListener));
//!
//! let relay = EventRelay::new(registry, config, gateway, bridge);
//! relay.relay_topic_event(&Event::new("order.created")).await?;
//! ```
//!
//! The relay is stateless and reentrant; see [`EventRelay`] for the
//! concurrency contract.

pub mod config;
pub mod error;
pub mod event;
pub mod gateway;
pub mod listener;
pub mod registry;
pub mod relay;

pub use config::{RedeliveryPolicy, RelayConfig};
pub use error::{RelayError, TransportError};
pub use event::{Event, Parameters, BROADCAST_PROXY, MESSAGE_DESTINATION};
pub use gateway::{BroadcastBridge, OutboundEventGateway};
pub use listener::{EventListener, ListenerError};
pub use registry::{EventListenerRegistry, ListenerRegistry};
pub use relay::EventRelay;
