//! Shared helpers for `PostgreSQL` comment store tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use commentable::comment::{
    adapters::postgres::{CommentPgPool, PostgresCommentStore},
    domain::{
        Comment, CommentBody, CommentId, CommentableRef, EntityId, PersistedCommentData, UserId,
    },
    ports::CommentStore,
};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use pg_embedded_setup_unpriv::TestCluster;
use tokio::runtime::Runtime;

/// SQL that creates the `comments` table and its indexes.
pub const CREATE_COMMENTS_SQL: &str =
    include_str!("../../migrations/2026-10-19-000000_create_comments/up.sql");

/// Template database name for the pre-migrated schema.
pub const TEMPLATE_DB: &str = "commentable_test_template";

/// Creates a tokio runtime for driving the async store from sync tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be built.
pub fn test_runtime() -> eyre::Result<Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// Ensures the template database exists with the schema applied.
///
/// # Errors
///
/// Returns an error if template creation or migration fails.
pub fn ensure_template(cluster: &TestCluster) -> eyre::Result<()> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let mut conn = PgConnection::establish(&url).map_err(|e| eyre::eyre!("{e}"))?;
            execute_sql_statements(&mut conn, CREATE_COMMENTS_SQL)?;
            Ok(())
        })
        .map_err(|e| eyre::eyre!("template setup failed: {e}"))?;
    Ok(())
}

/// Executes each `;`-separated statement of a migration file.
///
/// `diesel::sql_query` runs one statement per call, so the file is split
/// and comment-only fragments are skipped.
fn execute_sql_statements(conn: &mut PgConnection, sql: &str) -> eyre::Result<()> {
    for statement in sql.split(';') {
        let trimmed = statement.trim();
        if trimmed.is_empty() || trimmed.lines().all(|line| line.trim().starts_with("--")) {
            continue;
        }
        diesel::sql_query(trimmed)
            .execute(conn)
            .map_err(|e| eyre::eyre!("SQL error: {e}\nStatement: {trimmed}"))?;
    }
    Ok(())
}

/// Creates `db_name` from the template and returns a store over it.
///
/// # Errors
///
/// Returns an error if database creation or pool construction fails.
pub fn setup_store(cluster: &TestCluster, db_name: &str) -> eyre::Result<PostgresCommentStore> {
    cluster
        .create_database_from_template(db_name, TEMPLATE_DB)
        .map_err(|e| eyre::eyre!("failed to create {db_name}: {e}"))?;
    let url = cluster.connection().database_url(db_name);
    let manager = ConnectionManager::<PgConnection>::new(url);
    let pool: CommentPgPool = Pool::builder().max_size(1).build(manager)?;
    Ok(PostgresCommentStore::new(pool))
}

/// Drops the per-test database when the test finishes, even on panic.
pub struct CleanupGuard<'a> {
    cluster: &'a TestCluster,
    db_name: String,
}

impl<'a> CleanupGuard<'a> {
    /// Registers `db_name` for removal.
    #[must_use]
    pub const fn new(cluster: &'a TestCluster, db_name: String) -> Self {
        Self { cluster, db_name }
    }
}

impl Drop for CleanupGuard<'_> {
    #[expect(
        clippy::print_stderr,
        reason = "Cleanup failures are informational in tests"
    )]
    fn drop(&mut self) {
        if let Err(e) = self.cluster.drop_database(self.db_name.as_str()) {
            eprintln!("Warning: failed to drop test database {}: {e}", self.db_name);
        }
    }
}

/// Returns a fresh reference of the given kind.
///
/// # Errors
///
/// Returns an error if the kind fails validation.
pub fn reference(kind: &str) -> eyre::Result<CommentableRef> {
    CommentableRef::from_parts(kind, EntityId::new())
        .map_err(|err| eyre::eyre!("invalid reference: {err}"))
}

/// Returns a whole-minute timestamp, which survives `TIMESTAMPTZ` unchanged.
#[must_use]
pub fn timestamp(minute: i64) -> DateTime<Utc> {
    let base = Utc
        .with_ymd_and_hms(2026, 9, 1, 10, 0, 0)
        .single()
        .unwrap_or_default();
    base + Duration::minutes(minute)
}

/// Builds a comment created `minute` minutes after a fixed base time.
///
/// # Errors
///
/// Returns an error if the generated body fails validation.
pub fn comment_at(
    commentable: &CommentableRef,
    author: Option<UserId>,
    published: bool,
    minute: i64,
) -> eyre::Result<Comment> {
    let body = CommentBody::new(format!("remark {minute}"))
        .map_err(|err| eyre::eyre!("invalid body: {err}"))?;
    Ok(Comment::from_persisted(PersistedCommentData {
        id: CommentId::new(),
        commentable: commentable.clone(),
        author,
        body,
        published,
        created_at: timestamp(minute),
    }))
}

/// Stores every comment in order.
///
/// # Errors
///
/// Returns an error if any insert fails.
pub fn seed(
    runtime: &Runtime,
    store: &PostgresCommentStore,
    comments: &[Comment],
) -> eyre::Result<()> {
    for comment in comments {
        runtime.block_on(store.store(comment))?;
    }
    Ok(())
}
