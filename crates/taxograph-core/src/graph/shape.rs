//! Shape diagnostics over a built graph

use serde::Serialize;

use crate::error::{Result, TaxoError};
use crate::graph::types::{Direction, Graph};

/// Summary counts for a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Distinct identifiers
    pub nodes: usize,
    /// Parent entries over all nodes (one per non-root occurrence)
    pub edges: usize,
    /// Nodes with more than one parent entry
    pub multi_parent: usize,
    /// Nodes without children
    pub leaves: usize,
    /// Largest minimum depth
    pub max_depth: usize,
}

impl Graph {
    /// True iff no node has more than one parent entry
    pub fn is_single_parent_tree(&self) -> bool {
        self.nodes().all(|node| node.parent_ids.len() <= 1)
    }

    /// Identifiers of nodes with more than one parent entry, sorted
    pub fn multi_parent_nodes(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .nodes()
            .filter(|node| node.parent_ids.len() > 1)
            .map(|node| node.id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// True iff no node reaches itself along parent or child edges.
    ///
    /// Runs two full traversals per node; meant for offline validation.
    #[tracing::instrument(skip(self), fields(nodes = self.len()))]
    pub fn is_acyclic(&self) -> bool {
        self.find_cycle().is_none()
    }

    /// First node found on a cycle, if any.
    ///
    /// A node that reaches itself is always reported by `traverse` as
    /// `CycleDetected`, never as an entry of its own result.
    pub fn find_cycle(&self) -> Option<String> {
        for id in self.node_ids() {
            for direction in [Direction::Ancestors, Direction::Descendants] {
                match self.traverse(id, direction, None) {
                    Ok(_) => {}
                    Err(TaxoError::CycleDetected { id }) => return Some(id),
                    Err(e) => {
                        tracing::warn!(node = id, error = %e, "traversal failed during cycle check");
                    }
                }
            }
        }
        None
    }

    /// Collect summary counts
    pub fn stats(&self) -> Result<GraphStats> {
        let mut max_depth = 0;
        for id in self.node_ids() {
            max_depth = max_depth.max(self.depth(id)?);
        }

        Ok(GraphStats {
            nodes: self.len(),
            edges: self.nodes().map(|n| n.parent_ids.len()).sum(),
            multi_parent: self.multi_parent_nodes().len(),
            leaves: self.nodes().filter(|n| n.child_ids.is_empty()).count(),
            max_depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::graph::build;
    use crate::graph::types::Node;
    use crate::source::Element;

    fn with_extra_edge(mut graph: Graph, parent: &str, child: &str) -> Graph {
        graph
            .nodes
            .get_mut(parent)
            .unwrap()
            .child_ids
            .push(child.to_string());
        graph
            .nodes
            .get_mut(child)
            .unwrap()
            .parent_ids
            .push(parent.to_string());
        graph
    }

    fn chain() -> Graph {
        build(&Element::new("root").with_child(
            Element::new("A").with_child(Element::new("B").with_child(Element::new("C"))),
        ))
    }

    #[test]
    fn test_plain_tree() {
        let graph = chain();
        assert!(graph.is_single_parent_tree());
        assert!(graph.multi_parent_nodes().is_empty());
        assert!(graph.is_acyclic());
    }

    #[test]
    fn test_repeated_node_is_not_a_tree_but_acyclic() {
        let graph = build(&Element::new("root").with_children([
            Element::new("A").with_child(Element::new("B")),
            Element::new("C").with_child(Element::new("B")),
        ]));
        assert!(!graph.is_single_parent_tree());
        assert_eq!(graph.multi_parent_nodes(), vec!["B"]);
        assert!(graph.is_acyclic());
    }

    #[test]
    fn test_back_edge_is_cyclic() {
        let graph = with_extra_edge(chain(), "C", "A");
        assert!(!graph.is_acyclic());
        assert!(graph.find_cycle().is_some());
    }

    #[test]
    fn test_self_loop_is_cyclic() {
        let mut nodes = HashMap::new();
        let mut node = Node::new("root", None);
        node.child_ids.push("root".to_string());
        node.parent_ids.push("root".to_string());
        nodes.insert("root".to_string(), node);
        let graph = Graph {
            root_id: "root".to_string(),
            nodes,
        };
        assert_eq!(graph.find_cycle().as_deref(), Some("root"));
    }

    #[test]
    fn test_stats() {
        let graph = build(&Element::new("root").with_children([
            Element::new("A").with_child(Element::new("B")),
            Element::new("C").with_child(Element::new("B")),
        ]));
        let stats = graph.stats().unwrap();
        assert_eq!(
            stats,
            GraphStats {
                nodes: 4,
                edges: 4,
                multi_parent: 1,
                leaves: 1,
                max_depth: 2,
            }
        );
    }
}
