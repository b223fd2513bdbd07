//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source shortest distances over the indexed heap
//! - `prim`: minimum spanning tree, heap-driven and quadratic scan
//! - `kruskal`: minimum spanning tree via union-find
//! - `floyd_warshall`: all-pairs shortest paths over a dense matrix

pub mod dijkstra;
pub mod floyd_warshall;
pub mod kruskal;
pub mod prim;

pub use dijkstra::{dijkstra, dijkstra_with};
pub use floyd_warshall::{floyd_warshall, floyd_warshall_graph};
pub use kruskal::kruskal_mst;
pub use prim::{prim_mst, prim_mst_with_heap};
