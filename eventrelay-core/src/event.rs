//! Event type and reserved routing parameters.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Reserved parameter naming the single listener a queued event is addressed to.
///
/// Part of the wire contract between publishers and the relay. Components that
/// inspect event payloads must not treat this key as a business parameter; use
/// [`Event::destination`] / [`Event::set_destination`] instead of touching the
/// map directly.
pub const MESSAGE_DESTINATION: &str = "message-destination";

/// Reserved boolean parameter routing an event to the external broadcast
/// bridge instead of local listeners.
pub const BROADCAST_PROXY: &str = "broadcast-proxy";

/// Ordered event payload: string keys to arbitrary JSON values.
///
/// Insertion order is preserved and keys are unique.
pub type Parameters = IndexMap<String, Value>;

/// An event routed by the relay.
///
/// The subject is immutable once set. The parameter map may gain
/// relay-internal keys (the reserved routing keys above) but business-level
/// keys are never altered by the relay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    id: Uuid,
    subject: String,
    parameters: Parameters,
    timestamp: DateTime<Utc>,
}

impl Event {
    /// Create an event with an empty parameter map.
    pub fn new(subject: impl Into<String>) -> Self {
        Self::with_parameters(subject, Parameters::new())
    }

    /// Create an event with the given parameters.
    pub fn with_parameters(subject: impl Into<String>, parameters: Parameters) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            parameters,
            timestamp: Utc::now(),
        }
    }

    /// Add a parameter (builder style).
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Unique event id, generated at creation. Addressed copies produced by
    /// the relay keep the originating event's id so downstream consumers can
    /// correlate them.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The subject this event is published under.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Creation time. Not consulted for routing.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Full parameter map, reserved routing keys included.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Mutable access to the parameter map.
    pub fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    /// Business parameters only: everything except the reserved routing keys.
    pub fn business_parameters(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.parameters
            .iter()
            .filter(|(key, _)| key != &MESSAGE_DESTINATION && key != &BROADCAST_PROXY)
            .map(|(key, value)| (key.as_str(), value))
    }

    /// The listener identifier a queued event is addressed to, if any.
    pub fn destination(&self) -> Option<&str> {
        self.parameters.get(MESSAGE_DESTINATION)?.as_str()
    }

    /// Address this event to a single listener.
    pub fn set_destination(&mut self, identifier: impl Into<String>) {
        self.parameters
            .insert(MESSAGE_DESTINATION.to_string(), Value::from(identifier.into()));
    }

    /// Whether this event is flagged for the external broadcast bridge.
    pub fn is_broadcast_proxy(&self) -> bool {
        self.parameters
            .get(BROADCAST_PROXY)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Flag or unflag this event for the external broadcast bridge.
    pub fn set_broadcast_proxy(&mut self, proxy: bool) {
        self.parameters
            .insert(BROADCAST_PROXY.to_string(), Value::from(proxy));
    }

    /// An addressed copy of this event: same id, subject and timestamp, a
    /// fresh parameter map with the destination set to `identifier`.
    ///
    /// The copy never aliases this event's parameter map, so mutating one
    /// cannot affect the other.
    pub fn copy_with_destination(&self, identifier: &str) -> Self {
        let mut copy = self.clone();
        copy.set_destination(identifier);
        copy
    }
}
