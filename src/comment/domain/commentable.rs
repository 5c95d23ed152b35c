//! Capability contract implemented by entities that own comments.

use super::{CommentableRef, ModerationLevel, UserId};

/// An entity that owns a collection of comments.
///
/// Moderation, ownership, and moderator checks are optional capabilities: the
/// provided defaults describe an unmoderated entity with no owner and no
/// moderators, so implementors override only what they support.
pub trait Commentable: Send + Sync {
    /// Returns the reference under which this entity's comments are stored.
    fn commentable_ref(&self) -> CommentableRef;

    /// Returns the moderation tier applied to this entity's comments.
    fn moderation(&self) -> ModerationLevel {
        ModerationLevel::Unmoderated
    }

    /// Returns whether `user` owns this entity.
    fn is_owner(&self, _user: UserId) -> bool {
        false
    }

    /// Returns whether `user` may moderate this entity's comments.
    fn is_comment_moderator(&self, _user: UserId) -> bool {
        false
    }
}

/// Plain-data [`Commentable`] for hosts that load entity settings as rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentableRecord {
    reference: CommentableRef,
    moderation: ModerationLevel,
    owner: Option<UserId>,
    moderators: Vec<UserId>,
}

impl CommentableRecord {
    /// Creates an unmoderated record with no owner or moderators.
    #[must_use]
    pub const fn new(reference: CommentableRef) -> Self {
        Self {
            reference,
            moderation: ModerationLevel::Unmoderated,
            owner: None,
            moderators: Vec::new(),
        }
    }

    /// Sets the moderation tier.
    #[must_use]
    pub const fn with_moderation(mut self, moderation: ModerationLevel) -> Self {
        self.moderation = moderation;
        self
    }

    /// Sets the owning user.
    #[must_use]
    pub const fn with_owner(mut self, owner: UserId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Sets the users allowed to moderate comments.
    #[must_use]
    pub fn with_moderators(mut self, moderators: impl IntoIterator<Item = UserId>) -> Self {
        self.moderators = moderators.into_iter().collect();
        self
    }
}

impl Commentable for CommentableRecord {
    fn commentable_ref(&self) -> CommentableRef {
        self.reference.clone()
    }

    fn moderation(&self) -> ModerationLevel {
        self.moderation
    }

    fn is_owner(&self, user: UserId) -> bool {
        self.owner == Some(user)
    }

    fn is_comment_moderator(&self, user: UserId) -> bool {
        self.moderators.contains(&user)
    }
}
