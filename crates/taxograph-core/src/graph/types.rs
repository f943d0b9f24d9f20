use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, TaxoError};

/// Edge direction followed by a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow `parent_ids` (towards the root)
    Ancestors,
    /// Follow `child_ids` (towards the leaves)
    Descendants,
}

impl Direction {
    /// Identifiers adjacent to `node` in this direction
    pub fn edges(self, node: &Node) -> &[String] {
        match self {
            Direction::Ancestors => &node.parent_ids,
            Direction::Descendants => &node.child_ids,
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ancestors" | "up" => Ok(Direction::Ancestors),
            "descendants" | "down" => Ok(Direction::Descendants),
            other => Err(format!(
                "unknown direction '{}' (expected: ancestors, descendants)",
                other
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ancestors => write!(f, "ancestors"),
            Direction::Descendants => write!(f, "descendants"),
        }
    }
}

/// A taxonomy node, merged over every occurrence of its identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: String,
    /// One entry per occurrence; empty only for the root
    pub parent_ids: Vec<String>,
    /// One entry per encountered child occurrence
    pub child_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,
}

impl Node {
    pub(crate) fn new(id: &str, parent: Option<&str>) -> Self {
        Node {
            id: id.to_string(),
            parent_ids: parent.map(str::to_string).into_iter().collect(),
            child_ids: Vec::new(),
            words: None,
            gloss: None,
        }
    }
}

/// Node table keyed by identifier. Immutable once built.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) root_id: String,
    pub(crate) nodes: HashMap<String, Node>,
}

impl Graph {
    /// Identifier of the distinguished root node
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// Number of distinct identifiers
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node, failing with `UnknownIdentifier` if absent
    pub fn lookup(&self, id: &str) -> Result<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| TaxoError::unknown_identifier(id))
    }

    /// All nodes, in no particular order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All identifiers, sorted
    pub fn node_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.nodes.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
