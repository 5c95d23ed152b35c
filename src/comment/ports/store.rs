//! Storage port for persisting and querying comments.

use crate::comment::domain::{Comment, CommentId, CommentQuery};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for comment store operations.
pub type CommentStoreResult<T> = Result<T, CommentStoreError>;

/// Comment persistence and query contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Inserts a new comment.
    ///
    /// # Errors
    ///
    /// Returns [`CommentStoreError::DuplicateComment`] when the comment ID
    /// already exists, or [`CommentStoreError::Persistence`] when the write
    /// fails.
    async fn store(&self, comment: &Comment) -> CommentStoreResult<()>;

    /// Returns every comment satisfying `query`, sorted and windowed as the
    /// query describes. Lookups have no side effects.
    ///
    /// # Errors
    ///
    /// Returns [`CommentStoreError::Persistence`] when storage is
    /// unreachable. Filters are never partially applied.
    async fn query(&self, query: &CommentQuery) -> CommentStoreResult<Vec<Comment>>;
}

/// Errors returned by comment store implementations.
#[derive(Debug, Clone, Error)]
pub enum CommentStoreError {
    /// A comment with the same identifier already exists.
    #[error("duplicate comment identifier: {0}")]
    DuplicateComment(CommentId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CommentStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
