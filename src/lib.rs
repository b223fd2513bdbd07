//! Graphkit Library
//!
//! Classic data structures and graph algorithms: linked containers, an indexed
//! lazy-deletion min-heap, union-find, a directed weighted graph with
//! Dijkstra/Prim/Kruskal/Floyd-Warshall, and an arena binary search tree.

pub mod collections;
pub mod config;
pub mod error;
pub mod graph;
pub mod heap;
pub mod logging;
pub mod tree;
pub mod union_find;

pub use error::{GraphkitError, Result};
pub use graph::{Edge, NodeId, WeightedGraph};
pub use heap::{IndexedMinHeap, MaxPriorityQueue};
pub use tree::BinarySearchTree;
pub use union_find::UnionFind;
