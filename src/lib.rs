// eventrelay - an in-process event relay.
//
// Routes subject-named events to registered listeners with addressed queue
// delivery, broadcast delivery with bounded redelivery, and splitting into
// per-listener queued copies.

// Re-export the relay core
pub use eventrelay_core::*;

// Re-export the channel-backed transport
#[cfg(feature = "transport")]
pub use eventrelay_transport;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Event, EventListener, EventListenerRegistry, EventRelay, ListenerError, ListenerRegistry,
        Parameters, RedeliveryPolicy, RelayConfig, RelayError, TransportError,
    };

    #[cfg(feature = "transport")]
    pub use eventrelay_transport::{
        BridgeMessage, BroadcastChannelBridge, ChannelEventGateway, EventChannels,
    };
}
