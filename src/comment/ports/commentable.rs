//! Lookup port resolving entity identifiers of one kind.

use super::CommentStoreResult;
use crate::comment::domain::{Commentable, EntityId};
use async_trait::async_trait;
use std::sync::Arc;

/// Loads commentable entities of a single kind by identifier.
#[async_trait]
pub trait CommentableLookup: Send + Sync {
    /// Finds the entity with the given identifier.
    ///
    /// Returns `None` when no such entity exists.
    ///
    /// # Errors
    ///
    /// Returns [`super::CommentStoreError::Persistence`] when the lookup
    /// cannot reach storage.
    async fn find(&self, id: EntityId) -> CommentStoreResult<Option<Arc<dyn Commentable>>>;
}
