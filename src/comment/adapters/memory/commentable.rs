//! In-memory lookup of commentable entities.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::comment::{
    domain::{Commentable, EntityId},
    ports::{CommentStoreError, CommentStoreResult, CommentableLookup},
};

/// Map-backed [`CommentableLookup`] for a single entity kind.
#[derive(Clone, Default)]
pub struct InMemoryCommentableLookup {
    entities: Arc<RwLock<HashMap<EntityId, Arc<dyn Commentable>>>>,
}

impl InMemoryCommentableLookup {
    /// Creates an empty lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entity, keyed by its reference identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CommentStoreError::Persistence`] when the lock is poisoned.
    pub fn insert(&self, entity: Arc<dyn Commentable>) -> CommentStoreResult<()> {
        let mut entities = self.entities.write().map_err(|err| {
            CommentStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        entities.insert(entity.commentable_ref().id(), entity);
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryCommentableLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.entities.read().map_or(0, |entities| entities.len());
        f.debug_struct("InMemoryCommentableLookup")
            .field("entities", &count)
            .finish()
    }
}

#[async_trait]
impl CommentableLookup for InMemoryCommentableLookup {
    async fn find(&self, id: EntityId) -> CommentStoreResult<Option<Arc<dyn Commentable>>> {
        let entities = self.entities.read().map_err(|err| {
            CommentStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(entities.get(&id).cloned())
    }
}
