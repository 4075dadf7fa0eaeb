use std::sync::Arc;

use crate::modules::events::ports::EventsStore;
use crate::modules::events::use_cases::add_event::handler::AddEventHandler;
use crate::modules::events::use_cases::delete_event::handler::DeleteEventHandler;
use crate::modules::events::use_cases::list_events::handler::ListEventsHandler;

#[derive(Clone)]
pub struct AppState {
    pub list_events: Arc<ListEventsHandler>,
    pub add_event: Arc<AddEventHandler>,
    pub delete_event: Arc<DeleteEventHandler>,
}

impl AppState {
    pub fn new(store: Arc<dyn EventsStore + Send + Sync>) -> Self {
        let list_events = Arc::new(ListEventsHandler::new(store.clone()));
        let add_event = Arc::new(AddEventHandler::new(store.clone(), list_events.clone()));
        let delete_event = Arc::new(DeleteEventHandler::new(store, list_events.clone()));
        AppState {
            list_events,
            add_event,
            delete_event,
        }
    }
}
