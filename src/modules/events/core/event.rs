// Core data types for the events collection.
//
// Purpose
// - Express one calendar entry and the wire payload wrapping a list of them.
//
// Responsibilities
// - Carry the exact field set stored in the collection (title, id,
//   description) with no transport details attached.
// - Own the two fixed payloads served in place of an empty or unreachable
//   collection.

use serde::{Deserialize, Serialize};

/// One calendar entry. `id` is not unique across the collection: inserts all
/// receive one past the placeholder list length (see the add_event use case).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub id: i64,
    pub description: String,
}

/// The `{"events": [...]}` body every collection-backed endpoint responds
/// with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsPayload {
    pub events: Vec<Event>,
}

impl EventsPayload {
    /// Served when the collection holds no documents.
    pub fn no_events_yet() -> Self {
        EventsPayload {
            events: vec![Event {
                title: "No events yet!".to_string(),
                id: 1,
                description: "Add an event below.".to_string(),
            }],
        }
    }

    /// Served when the store cannot be reached. Callers only learn of the
    /// failure through the sentinel title.
    pub fn store_unreachable() -> Self {
        EventsPayload {
            events: vec![Event {
                title: "ERROR".to_string(),
                id: 1,
                description: "Firestore could not be contacted".to_string(),
            }],
        }
    }
}
