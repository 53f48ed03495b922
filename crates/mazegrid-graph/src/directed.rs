//! Directed graphs: cycle detection and topological ordering.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::ops::Deref;

use crate::graph::{Graph, GraphError};

/// A directed graph over nodes `0..n`. Each logical edge is stored once,
/// source → destination.
///
/// Derefs to [`Graph`] for traversal, connectivity and component queries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectedGraph {
    graph: Graph,
}

impl Deref for DirectedGraph {
    type Target = Graph;

    fn deref(&self) -> &Graph {
        &self.graph
    }
}

impl DirectedGraph {
    /// Build a graph over nodes `0..n` from a directed edge list.
    ///
    /// Duplicate edges and self-loops are kept.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if an edge references a node ≥ `n`.
    pub fn from_edge_list(n: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut adjacency: BTreeMap<usize, Vec<usize>> =
            (0..n).map(|node| (node, Vec::new())).collect();
        for &(source, dest) in edges {
            for node in [source, dest] {
                if node >= n {
                    return Err(GraphError::NodeOutOfRange { node, size: n });
                }
            }
            adjacency.entry(source).or_default().push(dest);
        }
        Ok(Self {
            graph: Graph::new((0..n).collect(), adjacency),
        })
    }

    /// The underlying generic graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Total number of stored edges.
    pub fn num_edges(&self) -> usize {
        self.nodes().map(|node| self.successors(node).len()).sum()
    }

    /// Whether the graph contains at least one directed cycle.
    ///
    /// Walks forward from every node's successors; finding the starting
    /// node again proves a cycle, and every cycle is found from its own
    /// members. Each walk visits a node at most once, so cyclic inputs
    /// terminate.
    pub fn has_cycles(&self) -> bool {
        for start in self.nodes() {
            let mut seen: HashSet<usize> = HashSet::new();
            let mut stack: Vec<usize> = self.successors(start).to_vec();
            while let Some(node) = stack.pop() {
                if node == start {
                    return true;
                }
                if !seen.insert(node) {
                    continue;
                }
                stack.extend_from_slice(self.successors(node));
            }
        }
        false
    }

    /// A node ordering in which every edge's source precedes its
    /// destination.
    ///
    /// Kahn's scheme over inflow sets: repeatedly emit the smallest node
    /// with no remaining inflow and discharge its outgoing edges, so the
    /// result is deterministic.
    ///
    /// # Errors
    /// [`GraphError::CycleDetected`] when no zero-inflow node exists while
    /// nodes remain — no total order exists on a cyclic graph.
    pub fn topological_order(&self) -> Result<Vec<usize>, GraphError> {
        let mut inflow: BTreeMap<usize, BTreeSet<usize>> =
            self.nodes().map(|node| (node, BTreeSet::new())).collect();
        for node in self.nodes() {
            for &successor in self.successors(node) {
                if let Some(sources) = inflow.get_mut(&successor) {
                    sources.insert(node);
                }
            }
        }

        let mut ordering = Vec::with_capacity(self.size());
        while !inflow.is_empty() {
            let next = inflow
                .iter()
                .find(|(_, sources)| sources.is_empty())
                .map(|(&node, _)| node);
            let Some(node) = next else {
                return Err(GraphError::CycleDetected);
            };
            ordering.push(node);
            inflow.remove(&node);
            for &successor in self.successors(node) {
                if let Some(sources) = inflow.get_mut(&successor) {
                    sources.remove(&node);
                }
            }
        }
        Ok(ordering)
    }
}
