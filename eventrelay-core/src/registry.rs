//! Listener registry: subject to listener-set lookup.

use crate::listener::EventListener;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// Lookup contract the relay dispatches against.
///
/// Implementations must return listeners in a deterministic order and an
/// empty vector (never an error) for unknown subjects.
pub trait ListenerRegistry: Send + Sync {
    /// All listeners registered under `subject`, in registration order.
    fn listeners(&self, subject: &str) -> Vec<Arc<dyn EventListener>>;
}

/// Default in-memory registry.
///
/// Listeners are kept per subject in registration order. Registering a
/// listener whose identifier already exists under a subject replaces the
/// previous registration in place, keeping its position.
#[derive(Default)]
pub struct EventListenerRegistry {
    listeners: DashMap<String, Vec<Arc<dyn EventListener>>>,
}

impl EventListenerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for a subject.
    pub fn register(&self, subject: impl Into<String>, listener: Arc<dyn EventListener>) {
        let subject = subject.into();
        let mut entry = self.listeners.entry(subject.clone()).or_default();

        match entry
            .iter_mut()
            .find(|existing| existing.identifier() == listener.identifier())
        {
            Some(slot) => *slot = listener,
            None => entry.push(listener),
        }

        debug!(subject = %subject, "registered event listener");
    }

    /// Register one listener for several subjects.
    pub fn register_for_subjects(&self, subjects: &[&str], listener: Arc<dyn EventListener>) {
        for subject in subjects {
            self.register(*subject, Arc::clone(&listener));
        }
    }

    /// Remove the listener with `identifier` from `subject`. Returns whether
    /// a registration was removed.
    pub fn unregister(&self, subject: &str, identifier: &str) -> bool {
        let Some(mut entry) = self.listeners.get_mut(subject) else {
            return false;
        };
        let before = entry.len();
        entry.retain(|listener| listener.identifier() != identifier);
        before != entry.len()
    }

    /// Remove the listener with `identifier` from every subject.
    pub fn clear_listeners(&self, identifier: &str) {
        for mut entry in self.listeners.iter_mut() {
            entry.retain(|listener| listener.identifier() != identifier);
        }
    }

    /// Number of listeners registered under `subject`.
    pub fn listener_count(&self, subject: &str) -> usize {
        self.listeners
            .get(subject)
            .map(|entry| entry.len())
            .unwrap_or(0)
    }

    /// Whether any listener is registered under `subject`.
    pub fn has_listener(&self, subject: &str) -> bool {
        self.listener_count(subject) > 0
    }
}

impl ListenerRegistry for EventListenerRegistry {
    fn listeners(&self, subject: &str) -> Vec<Arc<dyn EventListener>> {
        self.listeners
            .get(subject)
            .map(|entry| entry.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use crate::listener::ListenerError;
    use async_trait::async_trait;

    struct NamedListener {
        id: String,
    }

    impl NamedListener {
        fn new(id: &str) -> Arc<dyn EventListener> {
            Arc::new(Self { id: id.to_string() })
        }
    }

    #[async_trait]
    impl EventListener for NamedListener {
        fn identifier(&self) -> &str {
            &self.id
        }

        async fn handle(&self, _event: &Event) -> Result<(), ListenerError> {
            Ok(())
        }
    }

    #[test]
    fn unknown_subject_yields_empty_set() {
        let registry = EventListenerRegistry::new();
        assert!(registry.listeners("nobody.cares").is_empty());
        assert!(!registry.has_listener("nobody.cares"));
    }

    #[test]
    fn listeners_come_back_in_registration_order() {
        let registry = EventListenerRegistry::new();
        registry.register("order.created", NamedListener::new("billing"));
        registry.register("order.created", NamedListener::new("audit"));
        registry.register("order.created", NamedListener::new("mailer"));

        let ids: Vec<String> = registry
            .listeners("order.created")
            .iter()
            .map(|l| l.identifier().to_string())
            .collect();
        assert_eq!(ids, vec!["billing", "audit", "mailer"]);
    }

    #[test]
    fn reregistering_same_identifier_replaces_in_place() {
        let registry = EventListenerRegistry::new();
        registry.register("order.created", NamedListener::new("billing"));
        registry.register("order.created", NamedListener::new("audit"));
        registry.register("order.created", NamedListener::new("billing"));

        let ids: Vec<String> = registry
            .listeners("order.created")
            .iter()
            .map(|l| l.identifier().to_string())
            .collect();
        assert_eq!(ids, vec!["billing", "audit"]);
    }

    #[test]
    fn unregister_removes_only_the_named_listener() {
        let registry = EventListenerRegistry::new();
        registry.register("order.created", NamedListener::new("billing"));
        registry.register("order.created", NamedListener::new("audit"));

        assert!(registry.unregister("order.created", "billing"));
        assert!(!registry.unregister("order.created", "billing"));
        assert_eq!(registry.listener_count("order.created"), 1);
    }

    #[test]
    fn clear_listeners_removes_identifier_across_subjects() {
        let registry = EventListenerRegistry::new();
        registry.register_for_subjects(
            &["order.created", "order.cancelled"],
            NamedListener::new("billing"),
        );
        registry.register("order.created", NamedListener::new("audit"));

        registry.clear_listeners("billing");

        assert_eq!(registry.listener_count("order.created"), 1);
        assert_eq!(registry.listener_count("order.cancelled"), 0);
    }
}
