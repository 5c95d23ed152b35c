//! Moderation tiers and the viewer identity they are evaluated against.

use super::UserId;
use serde::{Deserialize, Serialize};

/// Setting value that selects the light moderation tier.
const LIGHT_MODERATION_SETTING: u32 = 1;

/// How strictly an entity moderates its comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationLevel {
    /// Comments are published immediately and everyone sees published ones.
    #[default]
    Unmoderated,
    /// New comments are pending; authors still see their own pending ones.
    Light,
    /// New comments are pending and hidden from all non-privileged viewers.
    Full,
}

impl ModerationLevel {
    /// Maps a raw moderation setting onto a tier.
    ///
    /// An absent setting means no moderation, `1` selects the light tier and
    /// every other value selects full moderation.
    #[must_use]
    pub const fn from_setting(setting: Option<u32>) -> Self {
        match setting {
            None => Self::Unmoderated,
            Some(LIGHT_MODERATION_SETTING) => Self::Light,
            Some(_) => Self::Full,
        }
    }

    /// Returns whether any moderation applies.
    #[must_use]
    pub const fn is_moderated(self) -> bool {
        !matches!(self, Self::Unmoderated)
    }
}

/// The identity asking to read comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Viewer {
    /// No authenticated identity.
    #[default]
    Anonymous,
    /// An authenticated user.
    User {
        /// Authenticated user identifier.
        id: UserId,
        /// Whether the user holds site-wide administrator rights.
        is_admin: bool,
    },
}

impl Viewer {
    /// Creates an anonymous viewer.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self::Anonymous
    }

    /// Creates a regular authenticated viewer.
    #[must_use]
    pub const fn user(id: UserId) -> Self {
        Self::User {
            id,
            is_admin: false,
        }
    }

    /// Creates an administrator viewer.
    #[must_use]
    pub const fn admin(id: UserId) -> Self {
        Self::User { id, is_admin: true }
    }

    /// Returns the authenticated user identifier, if any.
    #[must_use]
    pub const fn user_id(&self) -> Option<UserId> {
        match self {
            Self::Anonymous => None,
            Self::User { id, .. } => Some(*id),
        }
    }

    /// Returns whether the viewer is an administrator.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::User { is_admin: true, .. })
    }
}
