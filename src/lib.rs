//! Commentable: moderated comments for any domain entity.
//!
//! This crate lets a host application attach comments to its own entities
//! and decides, per viewer, which of those comments are visible, in what
//! order, and on which page.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure comment, moderation, and query types
//! - **Ports**: Abstract storage and entity lookup interfaces
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//! - **Services**: The visibility policy and comment orchestration
//!
//! # Modules
//!
//! - [`comment`]: Comment storage, moderation, and visibility

pub mod comment;
