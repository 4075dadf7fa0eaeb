// Outbound port for the events collection.
//
// Purpose
// - Describe the collection-scoped operations the use cases need from the
//   document store, independent of any concrete backend.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::events::core::event::Event;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure: the store never answered.
    #[error("store unreachable: {0}")]
    Unreachable(String),

    /// The store answered with a non-success response.
    #[error("backend error: {0}")]
    Backend(String),

    /// A stored document could not be decoded into an `Event`.
    #[error("malformed document: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait EventsStore {
    /// Fetch every document in the collection, in whatever order the store
    /// yields.
    async fn list(&self) -> Result<Vec<Event>, StoreError>;

    async fn add(&self, event: &Event) -> Result<(), StoreError>;

    /// Remove every document whose title, description and id all equal
    /// `event`'s. Matching nothing is not an error.
    async fn delete(&self, event: &Event) -> Result<(), StoreError>;
}
