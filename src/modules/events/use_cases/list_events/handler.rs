use std::sync::Arc;
use tracing::warn;

use crate::modules::events::core::event::EventsPayload;
use crate::modules::events::ports::EventsStore;

pub struct ListEventsHandler {
    store: Arc<dyn EventsStore + Send + Sync>,
}

impl ListEventsHandler {
    pub fn new(store: Arc<dyn EventsStore + Send + Sync>) -> Self {
        Self { store }
    }

    /// Fetch the whole collection and shape it for the wire.
    ///
    /// An empty collection becomes the fixed placeholder payload. A store
    /// failure is logged and becomes the fixed error payload; it never
    /// escapes to the caller.
    pub async fn handle(&self) -> EventsPayload {
        match self.store.list().await {
            Ok(events) if events.is_empty() => EventsPayload::no_events_yet(),
            Ok(events) => EventsPayload { events },
            Err(err) => {
                warn!(error = %err, "listing events failed, serving the error payload");
                EventsPayload::store_unreachable()
            }
        }
    }
}
