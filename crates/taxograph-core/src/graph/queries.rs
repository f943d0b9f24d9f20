//! Relationship queries built on [`Graph::traverse`]

use std::collections::BTreeSet;

use crate::error::Result;
use crate::graph::types::{Direction, Graph};

impl Graph {
    /// Every node reachable through parent edges
    pub fn ancestors(&self, id: &str) -> Result<BTreeSet<String>> {
        Ok(self
            .traverse(id, Direction::Ancestors, None)?
            .into_keys()
            .collect())
    }

    /// Every node reachable through child edges
    pub fn descendants(&self, id: &str) -> Result<BTreeSet<String>> {
        Ok(self
            .traverse(id, Direction::Descendants, None)?
            .into_keys()
            .collect())
    }

    /// Minimum number of edges between `id` and the root (0 for the root)
    pub fn depth(&self, id: &str) -> Result<usize> {
        let reached = self.traverse(id, Direction::Ancestors, Some(self.root_id.as_str()))?;
        Ok(reached.get(&self.root_id).copied().unwrap_or(0))
    }

    /// Minimum number of edges from `from` to `to`, when `to` is an ancestor
    /// or a descendant of `from`.
    ///
    /// Returns `None` for any other pair, including `from == to`. This is not
    /// a general shortest path: siblings and cousins are unrelated.
    pub fn distance(&self, from: &str, to: &str) -> Result<Option<usize>> {
        self.lookup(from)?;
        self.lookup(to)?;

        for direction in [Direction::Ancestors, Direction::Descendants] {
            let reached = self.traverse(from, direction, Some(to))?;
            if let Some(hops) = reached.get(to) {
                return Ok(Some(*hops));
            }
        }

        Ok(None)
    }
}
