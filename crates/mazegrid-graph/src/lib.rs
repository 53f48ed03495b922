//! **mazegrid-graph** — graph algorithms over arbitrary integer node sets.
//!
//! The generic library the grid model conceptually specializes:
//!
//! - **Traversal** in depth- and breadth-first discovery order
//!   ([`Graph::traverse_depth_first`], [`Graph::traverse_breadth_first`])
//! - **Connectivity** and component decomposition
//!   ([`Graph::is_connected`], [`Graph::connected_components`])
//! - **Cycle detection** and **topological ordering** for directed graphs
//!   ([`DirectedGraph::has_cycles`], [`DirectedGraph::topological_order`])
//! - The **tree test** for undirected graphs ([`UndirectedGraph::is_tree`])
//!
//! Adjacency is unweighted; duplicates and self-loops are permitted.
//! Cycle *queries* return booleans, while `topological_order` fails with
//! [`GraphError::CycleDetected`] since no total order exists on a cyclic
//! graph.

pub mod directed;
pub mod graph;
pub mod undirected;

pub use directed::DirectedGraph;
pub use graph::{Graph, GraphError};
pub use undirected::UndirectedGraph;
