//! Application services for commenting and comment visibility.

mod commenting;
mod registry;
mod visibility;

pub use commenting::{CommentService, CommentServiceError, CommentServiceResult};
pub use registry::CommentableRegistry;
pub use visibility::{VisibilityDecision, VisibilityPolicy};
