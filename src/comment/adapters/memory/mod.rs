//! In-memory adapter implementations.
//!
//! These adapters keep all state in process and are suitable for unit tests
//! and for hosts that do not need durable storage.

mod commentable;
mod store;

pub use commentable::InMemoryCommentableLookup;
pub use store::InMemoryCommentStore;
