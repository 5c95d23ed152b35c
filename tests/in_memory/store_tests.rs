//! Contract tests for the in-memory comment store.

use std::sync::Arc;

use super::helpers::{comment, reference, store};
use commentable::comment::{
    adapters::memory::InMemoryCommentStore,
    domain::{CommentQuery, EntityKind, PageWindow, UserId},
    ports::{CommentStore, CommentStoreError},
};
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn storing_the_same_comment_twice_is_rejected(
    store: Arc<InMemoryCommentStore>,
) -> Result<(), eyre::Report> {
    let article = reference("article")?;
    let original = comment(&article, None, true, 0)?;
    store.store(&original).await?;

    let result = store.store(&original).await;

    eyre::ensure!(
        matches!(result, Err(CommentStoreError::DuplicateComment(id)) if id == original.id()),
        "expected duplicate comment error, got {result:?}"
    );
    eyre::ensure!(store.comment_count()? == 1, "duplicate was stored");
    Ok(())
}

#[rstest]
#[tokio::test]
async fn unpublished_filter_returns_pending_comments_only(
    store: Arc<InMemoryCommentStore>,
) -> Result<(), eyre::Report> {
    let article = reference("article")?;
    let pending = comment(&article, None, false, 1)?;
    store.store(&comment(&article, None, true, 0)?).await?;
    store.store(&pending).await?;

    let found = store
        .query(&CommentQuery::for_commentable(article).unpublished())
        .await?;

    eyre::ensure!(found == vec![pending], "unexpected comments {found:?}");
    Ok(())
}

#[rstest]
#[tokio::test]
async fn kind_filter_separates_entity_kinds(
    store: Arc<InMemoryCommentStore>,
) -> Result<(), eyre::Report> {
    let author = UserId::new();
    let photo = reference("photo")?;
    let on_photo = comment(&photo, Some(author), true, 0)?;
    store.store(&on_photo).await?;
    store
        .store(&comment(&reference("article")?, Some(author), true, 1)?)
        .await?;

    let kind = EntityKind::new("photo")?;
    let found = store
        .query(&CommentQuery::all().of_kind(kind).authored_by(author))
        .await?;

    eyre::ensure!(found == vec![on_photo], "unexpected comments {found:?}");
    Ok(())
}

#[rstest]
#[tokio::test]
async fn window_past_the_end_is_empty(
    store: Arc<InMemoryCommentStore>,
) -> Result<(), eyre::Report> {
    let article = reference("article")?;
    for minute in 0..3 {
        store.store(&comment(&article, None, true, minute)?).await?;
    }

    let found = store
        .query(&CommentQuery::for_commentable(article).paginate(PageWindow::new(2, 5)))
        .await?;

    eyre::ensure!(found.is_empty(), "expected empty page, found {}", found.len());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_inserts_are_all_visible(
    store: Arc<InMemoryCommentStore>,
) -> Result<(), eyre::Report> {
    let article = reference("article")?;
    let mut handles = Vec::new();
    for minute in 0..16 {
        let shared = Arc::clone(&store);
        let new_comment = comment(&article, None, true, minute)?;
        handles.push(tokio::spawn(async move { shared.store(&new_comment).await }));
    }
    for handle in handles {
        handle.await??;
    }

    let found = store
        .query(&CommentQuery::for_commentable(article).in_order())
        .await?;

    eyre::ensure!(found.len() == 16, "expected 16 comments, found {}", found.len());
    eyre::ensure!(
        found
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if a.created_at() <= b.created_at())),
        "comments are not in ascending order"
    );
    Ok(())
}
