//! `PostgreSQL` comment store implementation.

use super::{
    models::{CommentRow, NewCommentRow},
    schema::comments,
};
use crate::comment::{
    domain::{
        Comment, CommentBody, CommentId, CommentQuery, CommentableRef, EntityId, EntityKind,
        PersistedCommentData, PublicationFilter, SortOrder, UserId,
    },
    ports::{CommentStore, CommentStoreError, CommentStoreResult},
};
use async_trait::async_trait;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

/// `PostgreSQL` connection pool type used by comment adapters.
pub type CommentPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed comment store.
#[derive(Debug, Clone)]
pub struct PostgresCommentStore {
    pool: CommentPgPool,
}

impl PostgresCommentStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: CommentPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> CommentStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CommentStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(CommentStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(CommentStoreError::persistence)?
    }
}

#[async_trait]
impl CommentStore for PostgresCommentStore {
    async fn store(&self, comment: &Comment) -> CommentStoreResult<()> {
        let comment_id = comment.id();
        let new_row = to_new_row(comment);

        self.run_blocking(move |connection| {
            diesel::insert_into(comments::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        CommentStoreError::DuplicateComment(comment_id)
                    }
                    _ => CommentStoreError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn query(&self, query: &CommentQuery) -> CommentStoreResult<Vec<Comment>> {
        let lookup = query.clone();
        let rows = self
            .run_blocking(move |connection| load_rows(connection, &lookup))
            .await?;
        debug!(matched = rows.len(), "postgres comment query");
        rows.into_iter().map(row_to_comment).collect()
    }
}

pub(super) fn to_new_row(comment: &Comment) -> NewCommentRow {
    NewCommentRow {
        id: comment.id().into_inner(),
        commentable_type: comment.commentable().kind().as_str().to_owned(),
        commentable_id: comment.commentable().id().into_inner(),
        user_id: comment.author().map(UserId::into_inner),
        body: comment.body().as_str().to_owned(),
        published: comment.is_published(),
        created_at: comment.created_at(),
    }
}

pub(super) fn row_to_comment(row: CommentRow) -> CommentStoreResult<Comment> {
    let CommentRow {
        id,
        commentable_type,
        commentable_id,
        user_id,
        body,
        published,
        created_at,
    } = row;

    let kind = EntityKind::new(commentable_type).map_err(CommentStoreError::persistence)?;
    let persisted_body = CommentBody::new(body).map_err(CommentStoreError::persistence)?;

    Ok(Comment::from_persisted(PersistedCommentData {
        id: CommentId::from_uuid(id),
        commentable: CommentableRef::new(kind, EntityId::from_uuid(commentable_id)),
        author: user_id.map(UserId::from_uuid),
        body: persisted_body,
        published,
        created_at,
    }))
}

fn load_rows(
    connection: &mut PgConnection,
    query: &CommentQuery,
) -> CommentStoreResult<Vec<CommentRow>> {
    let mut statement = comments::table
        .select(CommentRow::as_select())
        .into_boxed::<Pg>();

    if let Some(reference) = query.commentable() {
        statement = statement
            .filter(comments::commentable_type.eq(reference.kind().as_str().to_owned()))
            .filter(comments::commentable_id.eq(reference.id().into_inner()));
    }
    if let Some(kind) = query.kind() {
        statement = statement.filter(comments::commentable_type.eq(kind.as_str().to_owned()));
    }
    if let Some(author) = query.author() {
        statement = statement.filter(comments::user_id.eq(author.into_inner()));
    }

    statement = match query.publication() {
        PublicationFilter::Any => statement,
        PublicationFilter::Published => statement.filter(comments::published.eq(true)),
        PublicationFilter::Unpublished => statement.filter(comments::published.eq(false)),
        PublicationFilter::PublishedOrAuthoredBy(user) => statement.filter(
            comments::published
                .eq(true)
                .or(comments::user_id.eq(user.into_inner())),
        ),
    };

    statement = match query.order() {
        SortOrder::Ascending => statement.order((comments::created_at.asc(), comments::id.asc())),
        SortOrder::Descending => {
            statement.order((comments::created_at.desc(), comments::id.desc()))
        }
    };

    let offset = sql_bound(query.offset());
    if offset > 0 {
        statement = statement.offset(offset);
    }
    if let Some(max_results) = query.max_results() {
        statement = statement.limit(sql_bound(max_results));
    }

    statement
        .load::<CommentRow>(connection)
        .map_err(CommentStoreError::persistence)
}

/// Converts an offset or limit to the `BIGINT` Postgres expects.
///
/// Values past `i64::MAX` clamp to it; no table holds that many rows, so the
/// page is simply empty.
pub(super) fn sql_bound(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
