//! Storage-agnostic description of a comment lookup.

use super::{
    Comment, CommentableRef, EntityKind, PageWindow, SortOrder, UserId, pagination::to_usize,
};
use std::cmp::Ordering;

/// Which comments pass the publication check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PublicationFilter {
    /// Published and unpublished comments alike.
    #[default]
    Any,
    /// Published comments only.
    Published,
    /// Unpublished comments only.
    Unpublished,
    /// Published comments plus any comment written by the given user.
    PublishedOrAuthoredBy(UserId),
}

impl PublicationFilter {
    /// Returns whether `comment` passes this filter.
    #[must_use]
    pub fn admits(self, comment: &Comment) -> bool {
        match self {
            Self::Any => true,
            Self::Published => comment.is_published(),
            Self::Unpublished => !comment.is_published(),
            Self::PublishedOrAuthoredBy(user) => {
                comment.is_published() || comment.is_authored_by(user)
            }
        }
    }
}

/// Filter, ordering, and windowing criteria for a comment lookup.
///
/// Every supplied criterion must hold for a comment to be returned. Results
/// are sorted by `created_at` (ties broken by comment id), then skipped to the
/// page window, then truncated to `limit`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentQuery {
    commentable: Option<CommentableRef>,
    kind: Option<EntityKind>,
    author: Option<UserId>,
    publication: PublicationFilter,
    order: SortOrder,
    window: Option<PageWindow>,
    limit: Option<u32>,
}

impl CommentQuery {
    /// Creates a query spanning every commentable entity.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Creates a query scoped to one commentable entity.
    #[must_use]
    pub fn for_commentable(commentable: CommentableRef) -> Self {
        Self {
            commentable: Some(commentable),
            ..Self::default()
        }
    }

    /// Restricts results to entities of one kind.
    #[must_use]
    pub fn of_kind(mut self, kind: EntityKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restricts results to comments written by `user`.
    #[must_use]
    pub const fn authored_by(mut self, user: UserId) -> Self {
        self.author = Some(user);
        self
    }

    /// Replaces the publication filter.
    #[must_use]
    pub const fn with_publication(mut self, publication: PublicationFilter) -> Self {
        self.publication = publication;
        self
    }

    /// Keeps published comments only.
    #[must_use]
    pub const fn published(self) -> Self {
        self.with_publication(PublicationFilter::Published)
    }

    /// Keeps unpublished comments only.
    #[must_use]
    pub const fn unpublished(self) -> Self {
        self.with_publication(PublicationFilter::Unpublished)
    }

    /// Keeps published comments and any comment written by `user`.
    #[must_use]
    pub const fn published_or_authored_by(self, user: UserId) -> Self {
        self.with_publication(PublicationFilter::PublishedOrAuthoredBy(user))
    }

    /// Sets the sort direction.
    #[must_use]
    pub const fn ordered(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Sorts oldest first.
    #[must_use]
    pub const fn in_order(self) -> Self {
        self.ordered(SortOrder::Ascending)
    }

    /// Sorts newest first.
    #[must_use]
    pub const fn recent(self) -> Self {
        self.ordered(SortOrder::Descending)
    }

    /// Applies a page window after ordering.
    #[must_use]
    pub const fn paginate(mut self, window: PageWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// Caps the number of returned comments.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns the entity scope, if any.
    #[must_use]
    pub const fn commentable(&self) -> Option<&CommentableRef> {
        self.commentable.as_ref()
    }

    /// Returns the entity kind scope, if any.
    #[must_use]
    pub const fn kind(&self) -> Option<&EntityKind> {
        self.kind.as_ref()
    }

    /// Returns the author filter, if any.
    #[must_use]
    pub const fn author(&self) -> Option<UserId> {
        self.author
    }

    /// Returns the publication filter.
    #[must_use]
    pub const fn publication(&self) -> PublicationFilter {
        self.publication
    }

    /// Returns the sort direction.
    #[must_use]
    pub const fn order(&self) -> SortOrder {
        self.order
    }

    /// Returns the page window, if any.
    #[must_use]
    pub const fn window(&self) -> Option<PageWindow> {
        self.window
    }

    /// Returns the number of records skipped before the first result.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.window.map_or(0, PageWindow::offset)
    }

    /// Returns the maximum number of records returned, or `None` when
    /// unbounded. This is the smaller of the page size and the limit.
    #[must_use]
    pub fn max_results(&self) -> Option<usize> {
        let per_page = self.window.map(|window| to_usize(window.per_page()));
        let limit = self.limit.map(to_usize);
        match (per_page, limit) {
            (Some(page_size), Some(cap)) => Some(page_size.min(cap)),
            (page_size, cap) => page_size.or(cap),
        }
    }

    /// Returns whether `comment` satisfies every filter criterion.
    #[must_use]
    pub fn matches(&self, comment: &Comment) -> bool {
        let in_scope = self
            .commentable
            .as_ref()
            .is_none_or(|reference| comment.commentable() == reference);
        let of_kind = self
            .kind
            .as_ref()
            .is_none_or(|kind| comment.commentable().kind() == kind);
        let by_author = self.author.is_none_or(|user| comment.is_authored_by(user));

        in_scope && of_kind && by_author && self.publication.admits(comment)
    }

    /// Compares two comments in this query's sort order.
    #[must_use]
    pub fn compare(&self, left: &Comment, right: &Comment) -> Ordering {
        let ascending = left
            .created_at()
            .cmp(&right.created_at())
            .then_with(|| left.id().cmp(&right.id()));
        match self.order {
            SortOrder::Ascending => ascending,
            SortOrder::Descending => ascending.reverse(),
        }
    }

    /// Filters, sorts, and windows an in-process collection of comments.
    #[must_use]
    pub fn apply<'a>(&self, comments: impl IntoIterator<Item = &'a Comment>) -> Vec<Comment> {
        let mut selected: Vec<&Comment> = comments
            .into_iter()
            .filter(|comment| self.matches(comment))
            .collect();
        selected.sort_by(|left, right| self.compare(left, right));

        selected
            .into_iter()
            .skip(self.offset())
            .take(self.max_results().unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }
}
