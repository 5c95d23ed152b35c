//! Moderation-aware comment visibility.
//!
//! [`VisibilityDecision::evaluate`] chooses what a viewer may see on one
//! entity; [`VisibilityPolicy`] turns that choice into a store query.

use crate::comment::{
    domain::{
        Comment, CommentQuery, Commentable, ModerationLevel, Pagination, PaginationDefaults,
        PublicationFilter, UserId, Viewer,
    },
    ports::{CommentStore, CommentStoreResult},
};
use std::sync::Arc;
use tracing::debug;

/// Which comments of an entity a viewer may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityDecision {
    /// Published comments only.
    PublishedOnly,
    /// Every comment, published or not.
    Everything,
    /// Published comments plus the viewer's own pending ones.
    PublishedOrOwn(UserId),
    /// No comments at all.
    Nothing,
}

impl VisibilityDecision {
    /// Evaluates `viewer` against the moderation settings of `entity`.
    ///
    /// Unmoderated entities show published comments to everyone. On moderated
    /// entities the owner, comment moderators, and administrators see every
    /// comment. Under light moderation other authenticated viewers also see
    /// their own pending comments; under full moderation they see nothing.
    /// Anonymous viewers are never privileged.
    #[must_use]
    pub fn evaluate<E>(viewer: &Viewer, entity: &E) -> Self
    where
        E: Commentable + ?Sized,
    {
        let moderation = entity.moderation();
        if !moderation.is_moderated() {
            return Self::PublishedOnly;
        }

        let user = viewer.user_id();
        let privileged = viewer.is_admin()
            || user.is_some_and(|id| entity.is_owner(id) || entity.is_comment_moderator(id));
        if privileged {
            return Self::Everything;
        }

        match (moderation, user) {
            (ModerationLevel::Light, Some(id)) => Self::PublishedOrOwn(id),
            (ModerationLevel::Light, None) => Self::PublishedOnly,
            _ => Self::Nothing,
        }
    }

    /// Returns the publication filter for this decision, or `None` when no
    /// query should be issued.
    #[must_use]
    pub const fn publication_filter(self) -> Option<PublicationFilter> {
        match self {
            Self::PublishedOnly => Some(PublicationFilter::Published),
            Self::Everything => Some(PublicationFilter::Any),
            Self::PublishedOrOwn(user) => Some(PublicationFilter::PublishedOrAuthoredBy(user)),
            Self::Nothing => None,
        }
    }
}

/// Fetches the comments a viewer may see, ordered and paginated.
#[derive(Clone)]
pub struct VisibilityPolicy<S>
where
    S: CommentStore,
{
    store: Arc<S>,
    defaults: PaginationDefaults,
}

impl<S> VisibilityPolicy<S>
where
    S: CommentStore,
{
    /// Creates a policy using the standard pagination defaults.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self::with_defaults(store, PaginationDefaults::default())
    }

    /// Creates a policy with custom pagination defaults.
    #[must_use]
    pub const fn with_defaults(store: Arc<S>, defaults: PaginationDefaults) -> Self {
        Self { store, defaults }
    }

    /// Returns the pagination defaults in effect.
    #[must_use]
    pub const fn defaults(&self) -> &PaginationDefaults {
        &self.defaults
    }

    /// Returns the comments on `entity` that `viewer` may see.
    ///
    /// When the viewer may see nothing the store is not consulted and an
    /// empty list is returned whatever the requested page.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::comment::ports::CommentStoreError`] from the store
    /// unchanged.
    pub async fn visible_comments<E>(
        &self,
        viewer: &Viewer,
        entity: &E,
        pagination: &Pagination,
    ) -> CommentStoreResult<Vec<Comment>>
    where
        E: Commentable + ?Sized,
    {
        let reference = entity.commentable_ref();
        let decision = VisibilityDecision::evaluate(viewer, entity);
        debug!(commentable = %reference, ?decision, "evaluated comment visibility");

        let Some(publication) = decision.publication_filter() else {
            return Ok(Vec::new());
        };

        let normalized = pagination.normalize(&self.defaults);
        let query = CommentQuery::for_commentable(reference)
            .with_publication(publication)
            .ordered(normalized.order())
            .paginate(normalized.window())
            .limit(normalized.limit());
        self.store.query(&query).await
    }
}
