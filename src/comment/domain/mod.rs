//! Domain model for commentable entities.
//!
//! Comments, the references tying them to their owning entities, moderation
//! tiers, viewers, and the storage-agnostic query description all live here,
//! free of infrastructure concerns.

mod comment;
mod commentable;
mod error;
mod ids;
mod moderation;
mod pagination;
mod query;

pub use comment::{Comment, CommentBody, NewComment, PersistedCommentData};
pub use commentable::{Commentable, CommentableRecord};
pub use error::CommentDomainError;
pub use ids::{CommentId, CommentableRef, EntityId, EntityKind, UserId};
pub use moderation::{ModerationLevel, Viewer};
pub use pagination::{NormalizedPagination, PageWindow, Pagination, PaginationDefaults, SortOrder};
pub use query::{CommentQuery, PublicationFilter};
