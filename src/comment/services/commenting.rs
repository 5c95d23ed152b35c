//! Service layer for adding comments and listing them.

use super::{CommentableRegistry, VisibilityPolicy};
use crate::comment::{
    domain::{
        Comment, CommentDomainError, CommentQuery, Commentable, CommentableRef, EntityKind,
        NewComment, Pagination, PaginationDefaults, UserId, Viewer,
    },
    ports::{CommentStore, CommentStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for comment operations.
#[derive(Debug, Error)]
pub enum CommentServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] CommentDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] CommentStoreError),
    /// The reference does not resolve to an existing commentable entity.
    #[error("commentable not found: {0}")]
    InvalidReference(CommentableRef),
}

/// Result type for comment service operations.
pub type CommentServiceResult<T> = Result<T, CommentServiceError>;

/// Comment creation and retrieval service.
#[derive(Clone)]
pub struct CommentService<S, C>
where
    S: CommentStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    policy: VisibilityPolicy<S>,
    registry: CommentableRegistry,
}

impl<S, C> CommentService<S, C>
where
    S: CommentStore,
    C: Clock + Send + Sync,
{
    /// Creates a service with an empty registry and default pagination.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        let policy = VisibilityPolicy::new(Arc::clone(&store));
        Self {
            store,
            clock,
            policy,
            registry: CommentableRegistry::new(),
        }
    }

    /// Replaces the registry used to resolve commentable references.
    #[must_use]
    pub fn with_registry(mut self, registry: CommentableRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replaces the pagination defaults used by visibility queries.
    #[must_use]
    pub fn with_pagination_defaults(mut self, defaults: PaginationDefaults) -> Self {
        self.policy = VisibilityPolicy::with_defaults(Arc::clone(&self.store), defaults);
        self
    }

    /// Attaches a comment to `entity` and persists it.
    ///
    /// On a moderated entity the comment is stored unpublished regardless of
    /// the draft's flag; otherwise the draft's flag is kept.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::Store`] when persistence fails.
    pub async fn add_comment<E>(
        &self,
        entity: &E,
        draft: NewComment,
    ) -> CommentServiceResult<Comment>
    where
        E: Commentable + ?Sized,
    {
        let moderated = entity.moderation().is_moderated();
        let pending_or_draft = if moderated {
            draft.with_published(false)
        } else {
            draft
        };

        let comment = Comment::new(entity.commentable_ref(), pending_or_draft, &*self.clock);
        self.store.store(&comment).await?;
        info!(
            comment_id = %comment.id(),
            commentable = %comment.commentable(),
            published = comment.is_published(),
            "comment added"
        );
        Ok(comment)
    }

    /// Returns the comments on `entity` that `viewer` may see.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::Store`] when the lookup fails.
    pub async fn visible_comments<E>(
        &self,
        viewer: &Viewer,
        entity: &E,
        pagination: &Pagination,
    ) -> CommentServiceResult<Vec<Comment>>
    where
        E: Commentable + ?Sized,
    {
        Ok(self
            .policy
            .visible_comments(viewer, entity, pagination)
            .await?)
    }

    /// Resolves `reference` and returns the comments `viewer` may see on it.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::InvalidReference`] when the reference
    /// does not resolve, or [`CommentServiceError::Store`] when a lookup
    /// fails.
    pub async fn visible_comments_for_reference(
        &self,
        viewer: &Viewer,
        reference: &CommentableRef,
        pagination: &Pagination,
    ) -> CommentServiceResult<Vec<Comment>> {
        let entity = self.find_commentable(reference).await?;
        self.visible_comments(viewer, entity.as_ref(), pagination)
            .await
    }

    /// Loads the entity `reference` points at.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::InvalidReference`] when the reference
    /// does not resolve, or [`CommentServiceError::Store`] when the lookup
    /// fails.
    pub async fn find_commentable(
        &self,
        reference: &CommentableRef,
    ) -> CommentServiceResult<Arc<dyn Commentable>> {
        self.registry.resolve(reference).await
    }

    /// Returns every published comment on one entity, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::Store`] when the lookup fails.
    pub async fn comments_for_commentable(
        &self,
        reference: &CommentableRef,
    ) -> CommentServiceResult<Vec<Comment>> {
        let query = CommentQuery::for_commentable(reference.clone())
            .published()
            .recent();
        Ok(self.store.query(&query).await?)
    }

    /// Returns every published comment written by `user` on any entity,
    /// newest first.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::Store`] when the lookup fails.
    pub async fn comments_by_user(&self, user: UserId) -> CommentServiceResult<Vec<Comment>> {
        let query = CommentQuery::all().authored_by(user).published().recent();
        Ok(self.store.query(&query).await?)
    }

    /// Returns every published comment written by `user` on entities of
    /// `kind`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::Store`] when the lookup fails.
    pub async fn comments_by_user_for_kind(
        &self,
        user: UserId,
        kind: &EntityKind,
    ) -> CommentServiceResult<Vec<Comment>> {
        let query = CommentQuery::all()
            .of_kind(kind.clone())
            .authored_by(user)
            .published()
            .recent();
        Ok(self.store.query(&query).await?)
    }
}
