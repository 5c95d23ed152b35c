//! Then steps for comment visibility BDD scenarios.

use super::world::CommentWorld;
use commentable::comment::domain::Comment;
use rstest_bdd_macros::then;

fn visible_comments(world: &CommentWorld) -> Result<&[Comment], eyre::Report> {
    let result = world
        .last_visible
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing visibility result in scenario world"))?;
    result
        .as_deref()
        .map_err(|err| eyre::eyre!("unexpected visibility failure: {err}"))
}

#[then(r#"the visible comments are by "{authors}""#)]
fn visible_comments_are_by(world: &CommentWorld, authors: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = authors.split(", ").collect();
    let actual = visible_comments(world)?
        .iter()
        .map(|comment| {
            comment
                .author()
                .and_then(|id| world.user_name(id))
                .unwrap_or("anonymous")
        })
        .collect::<Vec<_>>();

    eyre::ensure!(
        actual == expected,
        "expected comments by {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then("no comments are visible")]
fn no_comments_visible(world: &CommentWorld) -> Result<(), eyre::Report> {
    let comments = visible_comments(world)?;
    eyre::ensure!(
        comments.is_empty(),
        "expected no visible comments, found {}",
        comments.len()
    );
    Ok(())
}

#[then("the two pages share no comments")]
fn pages_share_no_comments(world: &CommentWorld) -> Result<(), eyre::Report> {
    let [first, second] = world.pages.as_slice() else {
        return Err(eyre::eyre!(
            "expected two pages, found {}",
            world.pages.len()
        ));
    };
    eyre::ensure!(!first.is_empty(), "first page is empty");
    eyre::ensure!(!second.is_empty(), "second page is empty");
    eyre::ensure!(
        second.iter().all(|comment| !first.contains(comment)),
        "pages overlap"
    );
    Ok(())
}

fn added_comment(world: &CommentWorld) -> Result<&Comment, eyre::Report> {
    world
        .last_added
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing add result in scenario world"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected add failure: {err}"))
}

#[then("the stored comment is pending")]
fn stored_comment_is_pending(world: &CommentWorld) -> Result<(), eyre::Report> {
    let comment = added_comment(world)?;
    eyre::ensure!(!comment.is_published(), "expected comment to be pending");
    Ok(())
}

#[then("the stored comment is published")]
fn stored_comment_is_published(world: &CommentWorld) -> Result<(), eyre::Report> {
    let comment = added_comment(world)?;
    eyre::ensure!(comment.is_published(), "expected comment to be published");
    Ok(())
}
