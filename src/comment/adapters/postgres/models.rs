//! Diesel row models for comment persistence.

use super::schema::comments;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for comment records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CommentRow {
    /// Comment identifier.
    pub id: uuid::Uuid,
    /// Kind discriminator of the owning entity.
    pub commentable_type: String,
    /// Identifier of the owning entity.
    pub commentable_id: uuid::Uuid,
    /// Author identifier.
    pub user_id: Option<uuid::Uuid>,
    /// Comment text.
    pub body: String,
    /// Publication flag.
    pub published: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for comment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub struct NewCommentRow {
    /// Comment identifier.
    pub id: uuid::Uuid,
    /// Kind discriminator of the owning entity.
    pub commentable_type: String,
    /// Identifier of the owning entity.
    pub commentable_id: uuid::Uuid,
    /// Author identifier.
    pub user_id: Option<uuid::Uuid>,
    /// Comment text.
    pub body: String,
    /// Publication flag.
    pub published: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
