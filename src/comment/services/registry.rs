//! Resolution of typed commentable references through per-kind lookups.

use super::{CommentServiceError, CommentServiceResult};
use crate::comment::{
    domain::{Commentable, CommentableRef, EntityKind},
    ports::CommentableLookup,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Maps each [`EntityKind`] to the lookup that loads entities of that kind.
#[derive(Clone, Default)]
pub struct CommentableRegistry {
    lookups: HashMap<EntityKind, Arc<dyn CommentableLookup>>,
}

impl CommentableRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `lookup` for `kind`, returning the registry.
    #[must_use]
    pub fn with_lookup(mut self, kind: EntityKind, lookup: Arc<dyn CommentableLookup>) -> Self {
        self.register(kind, lookup);
        self
    }

    /// Registers `lookup` for `kind`, replacing any previous lookup.
    pub fn register(&mut self, kind: EntityKind, lookup: Arc<dyn CommentableLookup>) {
        self.lookups.insert(kind, lookup);
    }

    /// Returns whether a lookup is registered for `kind`.
    #[must_use]
    pub fn is_registered(&self, kind: &EntityKind) -> bool {
        self.lookups.contains_key(kind)
    }

    /// Loads the entity a reference points at.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::InvalidReference`] when no lookup is
    /// registered for the kind or the entity does not exist, and
    /// [`CommentServiceError::Store`] when the lookup fails.
    pub async fn resolve(
        &self,
        reference: &CommentableRef,
    ) -> CommentServiceResult<Arc<dyn Commentable>> {
        let Some(lookup) = self.lookups.get(reference.kind()) else {
            warn!(commentable = %reference, "no lookup registered for commentable kind");
            return Err(CommentServiceError::InvalidReference(reference.clone()));
        };

        lookup.find(reference.id()).await?.ok_or_else(|| {
            warn!(commentable = %reference, "commentable reference does not resolve");
            CommentServiceError::InvalidReference(reference.clone())
        })
    }
}

impl fmt::Debug for CommentableRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommentableRegistry")
            .field("kinds", &self.lookups.keys().collect::<Vec<_>>())
            .finish()
    }
}
