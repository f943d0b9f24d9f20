//! Taxograph Core Library
//!
//! Graph model and traversal engine for hierarchical taxonomies whose
//! nodes may recur under several parent branches.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod source;
