// Command data type for deleting an event.
//
// Responsibilities
// - Carry the full field set the store matches on. Any document equal on all
//   three fields is a deletion candidate.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteEvent {
    pub title: String,
    pub description: String,
    pub id: i64,
}
