//! Port contracts for comment storage and entity resolution.
//!
//! Ports define infrastructure-agnostic interfaces used by comment services.

pub mod commentable;
pub mod store;

pub use commentable::CommentableLookup;
pub use store::{CommentStore, CommentStoreError, CommentStoreResult};
