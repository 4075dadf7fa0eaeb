// Command data type for adding an event.
//
// Responsibilities
// - Carry the caller-supplied fields, independent of transport details. The
//   id is assigned by the handler, not the caller.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddEvent {
    pub title: String,
    pub description: String,
}
