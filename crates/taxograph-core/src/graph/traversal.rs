//! Minimum-hop reachability along one edge direction
//!
//! Explores every path outward from a start node and keeps, for each reached
//! node, the smallest hop count over all of them. The walk uses an explicit
//! stack, so graph depth never touches the call stack, and a node met again
//! while it is still on the current path is reported as a cycle.


use std::collections::{HashMap, HashSet};

use crate::error::{Result, TaxoError};
use crate::graph::types::{Direction, Graph, Node};

/// Reached identifier -> minimum hop count
pub type Distances = HashMap<String, usize>;

struct Frame<'g> {
    node: &'g Node,
    hops: usize,
    next_edge: usize,
}

impl Graph {
    /// Collect every node reachable from `start` along `direction`.
    ///
    /// `start` itself is never recorded. When `stop_at` is reached it is
    /// recorded but not expanded.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn traverse(
        &self,
        start: &str,
        direction: Direction,
        stop_at: Option<&str>,
    ) -> Result<Distances> {
        let start_node = self.lookup(start)?;
        if let Some(target) = stop_at {
            self.lookup(target)?;
        }

        let mut reached = Distances::new();
        if stop_at == Some(start) {
            return Ok(reached);
        }

        let mut on_path: HashSet<&str> = HashSet::from([start_node.id.as_str()]);
        let mut stack = vec![Frame {
            node: start_node,
            hops: 0,
            next_edge: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(next_id) = direction.edges(frame.node).get(frame.next_edge) else {
                on_path.remove(frame.node.id.as_str());
                stack.pop();
                continue;
            };
            frame.next_edge += 1;
            let hops = frame.hops + 1;

            if on_path.contains(next_id.as_str()) {
                return Err(TaxoError::CycleDetected {
                    id: next_id.clone(),
                });
            }
            let next = self.lookup(next_id)?;

            match reached.get_mut(next_id) {
                // Everything below was already reached at a smaller offset
                Some(best) if *best <= hops => continue,
                Some(best) => *best = hops,
                None => {
                    reached.insert(next_id.clone(), hops);
                }
            }

            if stop_at == Some(next_id.as_str()) {
                continue;
            }

            on_path.insert(next.id.as_str());
            stack.push(Frame {
                node: next,
                hops,
                next_edge: 0,
            });
        }

        tracing::trace!(reached = reached.len(), "traversal complete");
        Ok(reached)
    }
}
