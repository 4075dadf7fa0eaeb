use std::sync::Arc;
use tracing::warn;

use crate::modules::events::core::event::{Event, EventsPayload};
use crate::modules::events::ports::EventsStore;
use crate::modules::events::use_cases::delete_event::command::DeleteEvent;
use crate::modules::events::use_cases::list_events::handler::ListEventsHandler;

pub struct DeleteEventHandler {
    store: Arc<dyn EventsStore + Send + Sync>,
    lister: Arc<ListEventsHandler>,
}

impl DeleteEventHandler {
    pub fn new(store: Arc<dyn EventsStore + Send + Sync>, lister: Arc<ListEventsHandler>) -> Self {
        Self { store, lister }
    }

    /// Attempt the delete, then return the post-attempt listing either way.
    ///
    /// A failed delete is logged and otherwise indistinguishable from a
    /// successful one in the response.
    pub async fn handle(&self, command: DeleteEvent) -> EventsPayload {
        let event = Event {
            title: command.title,
            id: command.id,
            description: command.description,
        };
        if let Err(err) = self.store.delete(&event).await {
            warn!(error = %err, "deleting event failed");
        }
        self.lister.handle().await
    }
}

#[cfg(test)]
mod delete_event_handler_tests {
    use super::*;
    use crate::modules::events::adapters::outbound::in_memory::InMemoryEvents;
    use rstest::{fixture, rstest};

    fn make_event(title: &str) -> Event {
        Event {
            title: title.to_string(),
            id: 2,
            description: "test".to_string(),
        }
    }

    fn make_command(title: &str) -> DeleteEvent {
        DeleteEvent {
            title: title.to_string(),
            description: "test".to_string(),
            id: 2,
        }
    }

    type BeforeEachReturn = (Arc<InMemoryEvents>, DeleteEventHandler);

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let store = Arc::new(InMemoryEvents::with_events(vec![
            make_event("Standup"),
            make_event("Retro"),
        ]));
        let lister = Arc::new(ListEventsHandler::new(store.clone()));
        let handler = DeleteEventHandler::new(store.clone(), lister);
        (store, handler)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_the_matching_event_and_return_the_remainder(
        before_each: BeforeEachReturn,
    ) {
        let (_store, handler) = before_each;
        let payload = handler.handle(make_command("Standup")).await;
        assert_eq!(payload.events.len(), 1);
        assert_eq!(payload.events[0].title, "Retro");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_the_unchanged_listing_when_nothing_matches(
        before_each: BeforeEachReturn,
    ) {
        let (_store, handler) = before_each;
        let payload = handler.handle(make_command("absent")).await;
        assert_eq!(payload.events.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_still_return_a_listing_when_the_store_is_offline(
        before_each: BeforeEachReturn,
    ) {
        let (store, handler) = before_each;
        store.toggle_offline();
        let payload = handler.handle(make_command("Standup")).await;
        assert_eq!(payload, EventsPayload::store_unreachable());
    }
}
