//! Shared helpers for in-memory comment integration tests.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use commentable::comment::{
    adapters::memory::InMemoryCommentStore,
    domain::{
        Comment, CommentBody, CommentId, CommentableRef, EntityId, PersistedCommentData, UserId,
    },
    services::CommentService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by integration tests.
pub type TestService = CommentService<InMemoryCommentStore, DefaultClock>;

/// Provides a fresh in-memory store for each test.
#[fixture]
pub fn store() -> Arc<InMemoryCommentStore> {
    Arc::new(InMemoryCommentStore::new())
}

/// Builds a service over `store`.
#[must_use]
pub fn service_over(store: &Arc<InMemoryCommentStore>) -> TestService {
    CommentService::new(Arc::clone(store), Arc::new(DefaultClock))
}

/// Returns a fresh reference of the given kind.
///
/// # Errors
///
/// Returns an error if the kind fails validation.
pub fn reference(kind: &str) -> Result<CommentableRef, eyre::Report> {
    CommentableRef::from_parts(kind, EntityId::new())
        .map_err(|err| eyre::eyre!("invalid reference: {err}"))
}

fn timestamp(minute: i64) -> DateTime<Utc> {
    let base = Utc
        .with_ymd_and_hms(2026, 6, 1, 8, 0, 0)
        .single()
        .unwrap_or_default();
    base + Duration::minutes(minute)
}

/// Builds a persisted-looking comment created `minute` minutes after a
/// fixed base time.
///
/// # Errors
///
/// Returns an error if the generated body fails validation.
pub fn comment(
    commentable: &CommentableRef,
    author: Option<UserId>,
    published: bool,
    minute: i64,
) -> Result<Comment, eyre::Report> {
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
