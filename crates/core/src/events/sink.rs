//! Where the swipe engine sends its change events.

use std::sync::{Arc, Mutex, MutexGuard};

use super::DomainEvent;

/// Host-side listener for cart and investment changes.
///
/// The engine calls this after its state lock is released. Hosts use it to
/// refresh a cart badge or drop cached investor data; the call returns
/// immediately and a failing listener never rolls back a swipe.
pub trait DomainEventSink: Send + Sync {
    fn emit(&self, event: DomainEvent);

    /// Delivers events in order. Override when the host can coalesce them.
    fn emit_batch(&self, events: Vec<DomainEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// Drops every event. Used when the host has no listeners.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

/// Records events in arrival order so tests can assert on them.
#[derive(Clone, Default)]
pub struct MockDomainEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockDomainEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn recorded(&self) -> MutexGuard<'_, Vec<DomainEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.recorded().clone()
    }

    pub fn last(&self) -> Option<DomainEvent> {
        self.recorded().last().cloned()
    }

    pub fn clear(&self) {
        self.recorded().clear();
    }

    pub fn len(&self) -> usize {
        self.recorded().len()
    }

    pub fn is_empty(&self) -> bool {
        self.recorded().is_empty()
    }
}

impl DomainEventSink for MockDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        self.recorded().push(event);
    }
}
