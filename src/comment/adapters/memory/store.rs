//! In-memory comment store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::comment::{
    domain::{Comment, CommentId, CommentQuery},
    ports::{CommentStore, CommentStoreError, CommentStoreResult},
};

/// Thread-safe in-memory comment store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommentStore {
    comments: Arc<RwLock<HashMap<CommentId, Comment>>>,
}

impl InMemoryCommentStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored comments.
    ///
    /// # Errors
    ///
    /// Returns [`CommentStoreError::Persistence`] when the lock is poisoned.
    pub fn comment_count(&self) -> CommentStoreResult<usize> {
        let comments = self.comments.read().map_err(poisoned)?;
        Ok(comments.len())
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> CommentStoreError {
    CommentStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl CommentStore for InMemoryCommentStore {
    async fn store(&self, comment: &Comment) -> CommentStoreResult<()> {
        let mut comments = self.comments.write().map_err(poisoned)?;
        if comments.contains_key(&comment.id()) {
            return Err(CommentStoreError::DuplicateComment(comment.id()));
        }
        comments.insert(comment.id(), comment.clone());
        Ok(())
    }

    async fn query(&self, query: &CommentQuery) -> CommentStoreResult<Vec<Comment>> {
        let comments = self.comments.read().map_err(poisoned)?;
        let found = query.apply(comments.values());
        debug!(matched = found.len(), "in-memory comment query");
        Ok(found)
    }
}
