//! Step definitions for comment visibility BDD scenarios.

pub mod then;
