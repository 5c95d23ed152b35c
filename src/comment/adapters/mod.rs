//! Persistence adapters for the comment module.
//!
//! - [`memory::InMemoryCommentStore`]: thread-safe in-memory storage for tests
//!   and embedded use
//! - [`postgres::PostgresCommentStore`]: `PostgreSQL` persistence using Diesel

pub mod memory;
pub mod postgres;
