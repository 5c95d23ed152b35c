//! Comments attached to arbitrary commentable entities.
//!
//! Any entity implementing [`domain::Commentable`] gains a collection of
//! comments governed by its moderation tier. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Visibility policy and comment services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
