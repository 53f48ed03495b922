//! Undirected graphs: mirrored adjacency and the tree test.

use std::collections::BTreeMap;
use std::ops::Deref;

use crate::graph::{Graph, GraphError};

/// An undirected graph over nodes `0..n`. Each logical edge is stored as
/// two mirrored directed entries.
///
/// Derefs to [`Graph`] for traversal, connectivity and component queries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndirectedGraph {
    graph: Graph,
}

impl Deref for UndirectedGraph {
    type Target = Graph;

    fn deref(&self) -> &Graph {
        &self.graph
    }
}

impl UndirectedGraph {
    /// Build a graph over nodes `0..n` from an undirected edge list; an
    /// edge `a-b` makes `b` reachable from `a` and vice versa.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if an edge references a node ≥ `n`.
    pub fn from_edge_list(n: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut adjacency: BTreeMap<usize, Vec<usize>> =
            (0..n).map(|node| (node, Vec::new())).collect();
        for &(a, b) in edges {
            for node in [a, b] {
                if node >= n {
                    return Err(GraphError::NodeOutOfRange { node, size: n });
                }
            }
            adjacency.entry(a).or_default().push(b);
            adjacency.entry(b).or_default().push(a);
        }
        Ok(Self {
            graph: Graph::new((0..n).collect(), adjacency),
        })
    }

    /// The underlying generic graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Number of logical edges: each mirrored pair is counted once.
    pub fn num_edges(&self) -> usize {
        undirected_edge_count(&self.graph)
    }

    /// Whether every connected component is minimally connected
    /// (edge count = node count − 1).
    ///
    /// Checked per component, so a disconnected forest where every
    /// component is a tree also reports true.
    pub fn is_tree(&self) -> bool {
        self.connected_components().iter().all(|component| {
            undirected_edge_count(component) <= component.size().saturating_sub(1)
        })
    }
}

/// Count mirrored adjacency pairs once by keeping source > destination.
fn undirected_edge_count(graph: &Graph) -> usize {
    graph
        .edges()
        .iter()
        .filter(|(source, dest)| source > dest)
        .count()
}
