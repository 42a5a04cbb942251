//! Receive endpoint settings value object.

use super::DEFAULT_PREFETCH_COUNT;
use serde::{Deserialize, Serialize};

/// Queue name and delivery flags of one receive endpoint.
///
/// New settings describe a durable, shared, persistent queue with the
/// default prefetch count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiveEndpointSettings {
    queue_name: String,
    exclusive: bool,
    durable: bool,
    auto_delete: bool,
    prefetch_count: u16,
}

impl ReceiveEndpointSettings {
    /// Creates settings for `queue_name` with default flags.
    #[must_use]
    pub fn new(queue_name: impl Into<String>) -> Self {
        Self {
            queue_name: queue_name.into(),
            exclusive: false,
            durable: true,
            auto_delete: false,
            prefetch_count: DEFAULT_PREFETCH_COUNT,
        }
    }

    /// Returns the queue name.
    #[must_use]
    pub fn queue_name(&self) -> &str {
        &self.queue_name
    }

    /// Returns `true` when the queue is exclusive to one connection.
    #[must_use]
    pub const fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    /// Returns `true` when the queue survives broker restarts.
    #[must_use]
    pub const fn is_durable(&self) -> bool {
        self.durable
    }

    /// Returns `true` when the queue is deleted once its last consumer
    /// disconnects.
    #[must_use]
    pub const fn is_auto_delete(&self) -> bool {
        self.auto_delete
    }

    /// Returns `true` for non-durable, auto-delete queues.
    #[must_use]
    pub const fn is_temporary(&self) -> bool {
        !self.durable && self.auto_delete
    }

    /// Returns the consumer prefetch count.
    #[must_use]
    pub const fn prefetch_count(&self) -> u16 {
        self.prefetch_count
    }

    /// Sets the exclusive flag.
    pub const fn set_exclusive(&mut self, exclusive: bool) {
        self.exclusive = exclusive;
    }

    /// Sets the durable flag.
    pub const fn set_durable(&mut self, durable: bool) {
        self.durable = durable;
    }

    /// Sets the auto-delete flag.
    pub const fn set_auto_delete(&mut self, auto_delete: bool) {
        self.auto_delete = auto_delete;
    }

    /// Sets the consumer prefetch count.
    pub const fn set_prefetch_count(&mut self, prefetch_count: u16) {
        self.prefetch_count = prefetch_count;
    }
}
