//! Comment aggregate and the draft used to create it.

use super::{CommentDomainError, CommentId, CommentableRef, UserId};
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-blank comment text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentBody(String);

impl CommentBody {
    /// Creates a validated comment body. Surrounding whitespace is kept.
    ///
    /// # Errors
    ///
    /// Returns [`CommentDomainError::EmptyCommentBody`] when the text is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, CommentDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(CommentDomainError::EmptyCommentBody);
        }
        Ok(Self(raw))
    }

    /// Returns the body as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CommentBody {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CommentBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller-supplied comment content, before it is attached to an entity.
///
/// Drafts are published by default; moderation may override that when the
/// comment is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    body: CommentBody,
    author: Option<UserId>,
    published: bool,
}

impl NewComment {
    /// Creates a published, anonymous draft.
    ///
    /// # Errors
    ///
    /// Returns [`CommentDomainError::EmptyCommentBody`] when the body is
    /// blank.
    pub fn new(body: impl Into<String>) -> Result<Self, CommentDomainError> {
        Ok(Self {
            body: CommentBody::new(body)?,
            author: None,
            published: true,
        })
    }

    /// Sets the comment author.
    #[must_use]
    pub const fn by(mut self, author: UserId) -> Self {
        self.author = Some(author);
        self
    }

    /// Sets the publication flag.
    #[must_use]
    pub const fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// Returns the draft body.
    #[must_use]
    pub const fn body(&self) -> &CommentBody {
        &self.body
    }

    /// Returns the draft author, if any.
    #[must_use]
    pub const fn author(&self) -> Option<UserId> {
        self.author
    }

    /// Returns whether the draft is marked as published.
    #[must_use]
    pub const fn published(&self) -> bool {
        self.published
    }
}

/// A comment attached to a commentable entity.
///
/// Comments are immutable once created: the publication flag is decided at
/// creation time and `created_at` is the only sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    commentable: CommentableRef,
    author: Option<UserId>,
    body: CommentBody,
    published: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCommentData {
    /// Persisted comment identifier.
    pub id: CommentId,
    /// Owning entity reference.
    pub commentable: CommentableRef,
    /// Author, absent for anonymous comments.
    pub author: Option<UserId>,
    /// Comment text.
    pub body: CommentBody,
    /// Publication flag.
    pub published: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Attaches a draft to a commentable entity, stamping it with the clock.
    ///
    /// The timestamp is truncated to microseconds, the precision `PostgreSQL`
    /// keeps, so the returned comment equals the one read back from storage.
    #[must_use]
    pub fn new(commentable: CommentableRef, draft: NewComment, clock: &impl Clock) -> Self {
        let NewComment {
            body,
            author,
            published,
        } = draft;
        Self {
            id: CommentId::new(),
            commentable,
            author,
            body,
            published,
            created_at: clock.utc().trunc_subsecs(6),
        }
    }

    /// Reconstructs a comment from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCommentData) -> Self {
        Self {
            id: data.id,
            commentable: data.commentable,
            author: data.author,
            body: data.body,
            published: data.published,
            created_at: data.created_at,
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the owning entity reference.
    #[must_use]
    pub const fn commentable(&self) -> &CommentableRef {
        &self.commentable
    }

    /// Returns the author, if the comment was not anonymous.
    #[must_use]
    pub const fn author(&self) -> Option<UserId> {
        self.author
    }

    /// Returns the comment text.
    #[must_use]
    pub const fn body(&self) -> &CommentBody {
        &self.body
    }

    /// Returns whether the comment is publicly visible.
    #[must_use]
    pub const fn is_published(&self) -> bool {
        self.published
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether `user` wrote this comment.
    #[must_use]
    pub fn is_authored_by(&self, user: UserId) -> bool {
        self.author == Some(user)
    }
}
