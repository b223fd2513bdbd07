//! Directed weighted graph and the algorithms built on it
//!
//! - `WeightedGraph`: adjacency lists with insertion order preserved
//! - BFS/DFS traversal and union-find cycle detection
//! - Dijkstra, Prim, Kruskal and Floyd-Warshall in `algos`

pub mod algos;
pub mod cycle;
pub mod traversal;
pub mod types;
pub mod weighted;

#[cfg(test)]
pub(crate) mod fixtures;

pub use algos::{
    dijkstra, dijkstra_with, floyd_warshall, floyd_warshall_graph, kruskal_mst, prim_mst,
    prim_mst_with_heap,
};
pub use types::{Edge, NodeId, Weight, DEFAULT_WEIGHT};
pub use weighted::WeightedGraph;
