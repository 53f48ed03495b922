//! The generic graph core: node set plus adjacency lists, traversal,
//! connectivity and subgraph extraction.

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};
use std::fmt;

/// A finite graph over integer node identifiers.
///
/// Adjacency lists may contain duplicates and self-loops. Directed graphs
/// store each logical edge once; undirected graphs store two mirrored
/// entries. Ordered containers keep traversal and component extraction
/// deterministic.
///
/// A rendering collaborator needs nothing beyond [`nodes`](Self::nodes)
/// and [`edges`](Self::edges) to lay the graph out.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    nodes: BTreeSet<usize>,
    adjacency: BTreeMap<usize, Vec<usize>>,
}

impl Graph {
    pub(crate) fn new(nodes: BTreeSet<usize>, adjacency: BTreeMap<usize, Vec<usize>>) -> Self {
        Self { nodes, adjacency }
    }

    /// Number of nodes.
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over node identifiers in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes.iter().copied()
    }

    /// Whether `node` belongs to the node set.
    #[inline]
    pub fn contains(&self, node: usize) -> bool {
        self.nodes.contains(&node)
    }

    /// Successors of `node`, in insertion order.
    pub fn successors(&self, node: usize) -> &[usize] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every adjacency entry as an ordered pair. Undirected graphs yield
    /// both mirrored entries.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for (&node, successors) in &self.adjacency {
            for &other in successors {
                edges.push((node, other));
            }
        }
        edges
    }

    /// Depth-first walk from `start`, returning nodes in discovery order.
    ///
    /// Cycle-safe: each node is visited at most once. An unknown start
    /// yields an empty walk.
    pub fn traverse_depth_first(&self, start: usize) -> Vec<usize> {
        if !self.contains(start) {
            return Vec::new();
        }
        let mut order = Vec::new();
        let mut seen = HashSet::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if !seen.insert(node) {
                continue;
            }
            order.push(node);
            stack.extend_from_slice(self.successors(node));
        }
        order
    }

    /// Breadth-first walk from `start`, returning nodes in discovery order.
    ///
    /// Cycle-safe, queue discipline: the earliest discovered node is
    /// expanded next.
    pub fn traverse_breadth_first(&self, start: usize) -> Vec<usize> {
        if !self.contains(start) {
            return Vec::new();
        }
        let mut order = Vec::new();
        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            if !seen.insert(node) {
                continue;
            }
            order.push(node);
            queue.extend(self.successors(node).iter().copied());
        }
        order
    }

    /// Whether a single walk reaches every node.
    ///
    /// The walk starts from the smallest node id (node 0 on freshly built
    /// graphs); the empty graph is trivially connected.
    pub fn is_connected(&self) -> bool {
        match self.nodes.first() {
            Some(&start) => self.traverse_depth_first(start).len() == self.size(),
            None => true,
        }
    }

    /// The induced subgraph over `keep`: copied adjacency restricted to
    /// edges with both endpoints in the subset. The result shares no
    /// storage with `self`.
    pub fn subgraph(&self, keep: &[usize]) -> Graph {
        let nodes: BTreeSet<usize> = keep.iter().copied().collect();
        let adjacency = nodes
            .iter()
            .map(|&node| {
                let successors = self
                    .successors(node)
                    .iter()
                    .copied()
                    .filter(|other| nodes.contains(other))
                    .collect();
                (node, successors)
            })
            .collect();
        Graph { nodes, adjacency }
    }

    /// Decompose the graph into connected components, each an independent
    /// subgraph.
    ///
    /// Components come out ordered by their smallest node id; a connected
    /// graph yields exactly one component equal to itself.
    pub fn connected_components(&self) -> Vec<Graph> {
        let mut components = Vec::new();
        let mut remaining = self.nodes.clone();
        while let Some(&start) = remaining.first() {
            let members = self.traverse_depth_first(start);
            for node in &members {
                remaining.remove(node);
            }
            components.push(self.subgraph(&members));
        }
        components
    }
}

/// Errors raised by graph construction and ordering operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An edge references a node outside `0..size`.
    NodeOutOfRange { node: usize, size: usize },
    /// No topological order exists because the graph contains a cycle.
    CycleDetected,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeOutOfRange { node, size } => {
                write!(f, "edge references node {node}, graph has nodes 0..{size}")
            }
            Self::CycleDetected => {
                write!(f, "graph contains a cycle, no topological order exists")
            }
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::undirected::UndirectedGraph;

    /// The 7-node tree used throughout: 0-1-2 with 3, 4-5 and 6 hanging
    /// off node 2.
    fn tree() -> UndirectedGraph {
        UndirectedGraph::from_edge_list(7, &[(0, 1), (1, 2), (2, 3), (2, 4), (4, 5), (2, 6)])
            .unwrap()
    }

    fn two_components() -> UndirectedGraph {
        UndirectedGraph::from_edge_list(
            10,
            &[
                (0, 1),
                (1, 2),
                (2, 3),
                (2, 4),
                (4, 5),
                (2, 6),
                (7, 8),
                (7, 9),
                (8, 9),
            ],
        )
        .unwrap()
    }

    #[test]
    fn depth_first_discovery_order() {
        let g = tree();
        assert_eq!(g.traverse_depth_first(0), vec![0, 1, 2, 6, 4, 5, 3]);
        assert_eq!(g.traverse_depth_first(2), vec![2, 6, 4, 5, 3, 1, 0]);
    }

    #[test]
    fn breadth_first_discovery_order() {
        let g = tree();
        assert_eq!(g.traverse_breadth_first(2), vec![2, 1, 3, 4, 6, 0, 5]);
        assert_eq!(g.traverse_breadth_first(0), vec![0, 1, 2, 3, 4, 6, 5]);
    }

    #[test]
    fn traversal_from_unknown_node_is_empty() {
        let g = tree();
        assert!(g.traverse_depth_first(42).is_empty());
        assert!(g.traverse_breadth_first(42).is_empty());
    }

    #[test]
    fn traversal_is_cycle_safe() {
        let g = UndirectedGraph::from_edge_list(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        assert_eq!(g.traverse_depth_first(0).len(), 3);
        assert_eq!(g.traverse_breadth_first(0).len(), 3);
    }

    #[test]
    fn connectivity() {
        assert!(tree().is_connected());
        assert!(!two_components().is_connected());
    }

    #[test]
    fn components_of_connected_graph_is_itself() {
        let g = tree();
        let components = g.graph().connected_components();
        assert_eq!(components.len(), 1);
        assert_eq!(&components[0], g.graph());
    }

    #[test]
    fn components_split_by_reachability() {
        let components = two_components().graph().connected_components();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].size(), 7);
        assert_eq!(components[1].size(), 3);
        let second: Vec<usize> = components[1].nodes().collect();
        assert_eq!(second, vec![7, 8, 9]);
    }

    #[test]
    fn subgraph_is_induced() {
        let g = tree();
        let sub = g.subgraph(&[1, 2, 3]);
        // Node 1's edge to 0 and node 2's edges to 4 and 6 are dropped.
        assert_eq!(sub.successors(1), &[2]);
        assert_eq!(sub.successors(2), &[1, 3]);
        assert_eq!(sub.successors(3), &[2]);
    }

    #[test]
    fn edges_list_mirrors_undirected_storage() {
        let g = UndirectedGraph::from_edge_list(2, &[(0, 1)]).unwrap();
        assert_eq!(g.edges(), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn empty_graph_is_connected() {
        let g = UndirectedGraph::from_edge_list(0, &[]).unwrap();
        assert!(g.is_connected());
        assert!(g.connected_components().is_empty());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::undirected::UndirectedGraph;

    #[test]
    fn graph_json_round_trip() {
        let g = UndirectedGraph::from_edge_list(3, &[(0, 1), (1, 2)]).unwrap();
        let json = serde_json::to_string(g.graph()).unwrap();
        let back: super::Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, g.graph());
    }
}
