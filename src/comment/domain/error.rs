//! Error types for comment domain validation.

use thiserror::Error;

/// Errors returned while constructing comment domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentDomainError {
    /// The comment body is empty after trimming.
    #[error("comment body must not be empty")]
    EmptyCommentBody,

    /// The entity kind contains characters outside `[a-z0-9_]` or is empty.
    #[error(
        "entity kind '{0}' is invalid (expected non-empty lowercase alphanumeric and underscores)"
    )]
    InvalidEntityKind(String),

    /// The entity kind exceeds the 100-character storage limit.
    #[error("entity kind exceeds 100 character limit: {0}")]
    EntityKindTooLong(String),
}
