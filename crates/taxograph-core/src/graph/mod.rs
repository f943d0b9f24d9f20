//! Taxonomy graph model and traversal engine
//!
//! - `builder`: DAG construction from a source tree, merging repeated identifiers
//! - `traversal`: minimum-hop reachability along parent or child edges
//! - `queries`: ancestors, descendants, depth and distance
//! - `shape`: tree and acyclicity diagnostics

pub mod builder;
pub mod queries;
pub mod shape;
pub mod traversal;
pub mod types;

pub use builder::{build, build_with, BuildOptions};
pub use shape::GraphStats;
pub use types::{Direction, Graph, Node};
