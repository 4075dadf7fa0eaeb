use std::sync::Arc;
use thiserror::Error;

use crate::modules::events::core::event::{Event, EventsPayload};
use crate::modules::events::ports::{EventsStore, StoreError};
use crate::modules::events::use_cases::add_event::command::AddEvent;
use crate::modules::events::use_cases::list_events::handler::ListEventsHandler;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("store write failed: {0}")]
    StoreWriteFailed(#[from] StoreError),
}

pub struct AddEventHandler {
    store: Arc<dyn EventsStore + Send + Sync>,
    lister: Arc<ListEventsHandler>,
}

impl AddEventHandler {
    pub fn new(store: Arc<dyn EventsStore + Send + Sync>, lister: Arc<ListEventsHandler>) -> Self {
        Self { store, lister }
    }

    /// Persist a new event, then return the post-insert listing.
    ///
    /// A failed write surfaces as `StoreWriteFailed`; the listing is not
    /// attempted in that case.
    pub async fn handle(&self, command: AddEvent) -> Result<EventsPayload, ApplicationError> {
        let event = Event {
            title: command.title,
            id: next_event_id(),
            description: command.description,
        };
        self.store.add(&event).await?;
        Ok(self.lister.handle().await)
    }
}

// Legacy id scheme: one past the placeholder list length. The placeholder
// list always holds one element, so every insert is assigned id 2 and ids
// are not unique across the collection.
fn next_event_id() -> i64 {
    EventsPayload::no_events_yet().events.len() as i64 + 1
}
