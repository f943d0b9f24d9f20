//! Graph construction from a source tree
//!
//! The source is a plain tree of occurrences. An identifier that occurs at
//! several positions is merged into one node with one parent entry per
//! occurrence, which turns the tree into a DAG.

use std::collections::HashMap;

use crate::graph::types::{Graph, Node};
use crate::source::SourceElement;

/// Graph construction settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Append a child id to a parent only once
    pub dedup_child_ids: bool,
}

/// Build a graph from `root`, keeping every repeated child entry
pub fn build<E: SourceElement>(root: &E) -> Graph {
    build_with(root, &BuildOptions::default())
}

/// Build a graph from `root`
#[tracing::instrument(skip_all, fields(root = %root.id(), dedup = opts.dedup_child_ids))]
pub fn build_with<E: SourceElement>(root: &E, opts: &BuildOptions) -> Graph {
    let mut nodes: HashMap<String, Node> = HashMap::new();
    // Pre-order walk; children pushed in reverse so they pop in document order
    let mut stack: Vec<(&E, Option<&str>)> = vec![(root, None)];

    while let Some((element, parent)) = stack.pop() {
        visit(&mut nodes, element, parent, opts);

        for child in element.children().iter().rev() {
            stack.push((child, Some(element.id())));
        }
    }

    tracing::debug!(nodes = nodes.len(), "graph built");

    Graph {
        root_id: root.id().to_string(),
        nodes,
    }
}

fn visit<E: SourceElement>(
    nodes: &mut HashMap<String, Node>,
    element: &E,
    parent: Option<&str>,
    opts: &BuildOptions,
) {
    let id = element.id();

    match nodes.get_mut(id) {
        Some(node) => {
            if let Some(parent) = parent {
                node.parent_ids.push(parent.to_string());
            }
        }
        None => {
            let mut node = Node::new(id, parent);
            node.words = element.words().map(str::to_string);
            node.gloss = element.gloss().map(str::to_string);
            nodes.insert(id.to_string(), node);
        }
    }

    let Some(parent) = parent else {
        return;
    };
    if let Some(parent_node) = nodes.get_mut(parent) {
        if !(opts.dedup_child_ids && parent_node.child_ids.iter().any(|c| c == id)) {
            parent_node.child_ids.push(id.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Element;

    fn diamond() -> Element {
        Element::new("root").with_children([
            Element::new("A").with_child(Element::new("B")),
            Element::new("C").with_child(Element::new("B")),
        ])
    }

    #[test]
    fn test_root_has_no_parents() {
        let graph = build(&diamond());
        let root = graph.lookup("root").unwrap();
        assert!(root.parent_ids.is_empty());
        assert_eq!(root.child_ids, vec!["A", "C"]);
        assert_eq!(graph.root_id(), "root");
    }

    #[test]
    fn test_repeated_identifier_merges_into_one_node() {
        let graph = build(&diamond());
        assert_eq!(graph.len(), 4);
        let b = graph.lookup("B").unwrap();
        assert_eq!(b.parent_ids, vec!["A", "C"]);
        assert!(b.child_ids.is_empty());
    }

    #[test]
    fn test_repeated_subtree_duplicates_child_entries() {
        // X recurs under A and C; its child Y is appended on both walks
        let root = Element::new("root").with_children([
            Element::new("A").with_child(Element::new("X").with_child(Element::new("Y"))),
            Element::new("C").with_child(Element::new("X").with_child(Element::new("Y"))),
        ]);
        let graph = build(&root);

        assert_eq!(graph.lookup("X").unwrap().child_ids, vec!["Y", "Y"]);
        assert_eq!(graph.lookup("Y").unwrap().parent_ids, vec!["X", "X"]);
    }

    #[test]
    fn test_dedup_child_ids_keeps_parent_entries() {
        let root = Element::new("root").with_children([
            Element::new("A").with_child(Element::new("X").with_child(Element::new("Y"))),
            Element::new("C").with_child(Element::new("X").with_child(Element::new("Y"))),
        ]);
        let graph = build_with(
            &root,
            &BuildOptions {
                dedup_child_ids: true,
            },
        );

        assert_eq!(graph.lookup("X").unwrap().child_ids, vec!["Y"]);
        assert_eq!(graph.lookup("X").unwrap().parent_ids, vec!["A", "C"]);
        assert_eq!(graph.lookup("Y").unwrap().parent_ids, vec!["X", "X"]);
    }

    #[test]
    fn test_children_keep_document_order() {
        let root = Element::new("root").with_children([
            Element::new("c"),
            Element::new("a"),
            Element::new("b"),
        ]);
        let graph = build(&root);
        assert_eq!(graph.lookup("root").unwrap().child_ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_labels_come_from_first_occurrence() {
        let root = Element::new("root").with_children([
            Element::new("A").with_words("first").with_gloss("g1"),
            Element::new("A").with_words("second"),
        ]);
        let graph = build(&root);
        let a = graph.lookup("A").unwrap();
        assert_eq!(a.words.as_deref(), Some("first"));
        assert_eq!(a.gloss.as_deref(), Some("g1"));
        assert_eq!(a.parent_ids, vec!["root", "root"]);
        assert_eq!(graph.lookup("root").unwrap().child_ids, vec!["A", "A"]);
    }

    #[test]
    fn test_single_element_tree() {
        let graph = build(&Element::new("root"));
        assert_eq!(graph.len(), 1);
        assert!(graph.lookup("root").unwrap().child_ids.is_empty());
    }
}
