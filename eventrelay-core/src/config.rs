//! Redelivery configuration.

use std::sync::atomic::{AtomicU32, Ordering};

/// Bound on redelivery attempts for topic dispatch.
///
/// The relay reads this fresh on every `relay_topic_event` call, so
/// implementations may back it with live configuration.
pub trait RedeliveryPolicy: Send + Sync {
    /// Maximum number of additional attempts after the first failed listener
    /// invocation. Zero means exactly one attempt, no retry.
    fn max_redelivery_count(&self) -> u32;
}

/// Relay configuration with a runtime-adjustable redelivery bound.
#[derive(Debug)]
pub struct RelayConfig {
    max_redelivery_count: AtomicU32,
}

impl RelayConfig {
    pub const DEFAULT_MAX_REDELIVERY_COUNT: u32 = 3;

    pub fn new(max_redelivery_count: u32) -> Self {
        Self {
            max_redelivery_count: AtomicU32::new(max_redelivery_count),
        }
    }

    /// Change the redelivery bound. Takes effect on the next topic dispatch.
    pub fn set_max_redelivery_count(&self, count: u32) {
        self.max_redelivery_count.store(count, Ordering::Relaxed);
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_REDELIVERY_COUNT)
    }
}

impl RedeliveryPolicy for RelayConfig {
    fn max_redelivery_count(&self) -> u32 {
        self.max_redelivery_count.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_redelivery_bound() {
        let config = RelayConfig::default();
        assert_eq!(config.max_redelivery_count(), 3);
    }

    #[test]
    fn bound_is_adjustable_at_runtime() {
        let config = RelayConfig::new(5);
        assert_eq!(config.max_redelivery_count(), 5);

        config.set_max_redelivery_count(0);
        assert_eq!(config.max_redelivery_count(), 0);
    }
}
