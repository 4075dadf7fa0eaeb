// Composition root for the events bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the concrete store adapter.
// - Wire the adapter into the use case handlers.
// - Expose the HTTP router to main.

pub mod http;
pub mod state;
