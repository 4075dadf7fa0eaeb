// In memory implementation of the EventsStore port.
//
// Purpose
// - Support handler and HTTP tests and local development without a Firestore
//   project.
//
// Responsibilities
// - Keep the collection in a Vec behind an RwLock.
// - Simulate an unreachable store when toggled offline.

use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::modules::events::core::event::Event;
use crate::modules::events::ports::{EventsStore, StoreError};

pub struct InMemoryEvents {
    inner: RwLock<Vec<Event>>,
    offline: AtomicBool,
}

impl InMemoryEvents {
    pub fn new() -> Self {
        Self::with_events(Vec::new())
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            inner: RwLock::new(events),
            offline: AtomicBool::new(false),
        }
    }

    /// Flip between reachable and unreachable. While offline every operation
    /// fails with `StoreError::Unreachable`.
    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unreachable("events store offline".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryEvents {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EventsStore for InMemoryEvents {
    async fn list(&self) -> Result<Vec<Event>, StoreError> {
        self.check_online()?;
        Ok(self.inner.read().await.clone())
    }

    async fn add(&self, event: &Event) -> Result<(), StoreError> {
        self.check_online()?;
        self.inner.write().await.push(event.clone());
        Ok(())
    }

    async fn delete(&self, event: &Event) -> Result<(), StoreError> {
        self.check_online()?;
        self.inner.write().await.retain(|stored| stored != event);
        Ok(())
    }
}
