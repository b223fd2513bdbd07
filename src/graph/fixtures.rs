//! Shared test graphs

use crate::graph::WeightedGraph;

/// Directed graph with self-loops used for traversal order checks
pub fn traversal_graph() -> WeightedGraph {
    let mut graph = WeightedGraph::new();
    for (u, v) in [
        (0, 1),
        (0, 2),
        (4, 4),
        (2, 4),
        (1, 2),
        (2, 0),
        (2, 3),
        (3, 3),
        (5, 5),
        (1, 5),
    ] {
        graph.add_unit_edge(u, v).unwrap();
    }
    graph
}

/// The classic nine-node undirected weighted graph, zero meaning no edge
pub fn nine_node_matrix() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 8.0, 0.0],
        vec![4.0, 0.0, 8.0, 0.0, 0.0, 0.0, 0.0, 11.0, 0.0],
        vec![0.0, 8.0, 0.0, 7.0, 0.0, 4.0, 0.0, 0.0, 2.0],
        vec![0.0, 0.0, 7.0, 0.0, 9.0, 14.0, 0.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0, 9.0, 0.0, 10.0, 0.0, 0.0, 0.0],
        vec![0.0, 0.0, 4.0, 14.0, 10.0, 0.0, 2.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 1.0, 6.0],
        vec![8.0, 11.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 7.0],
        vec![0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 6.0, 7.0, 0.0],
    ]
}

/// Five nodes, one direction per edge
pub fn prim_graph() -> WeightedGraph {
    let mut graph = WeightedGraph::with_capacity(5);
    for (u, v, w) in [
        (0, 1, 2.0),
        (0, 3, 6.0),
        (1, 2, 3.0),
        (1, 3, 8.0),
        (2, 4, 7.0),
        (3, 4, 9.0),
        (1, 4, 5.0),
    ] {
        graph.add_edge(u, v, w).unwrap();
    }
    graph
}

/// `prim_graph` with every edge mirrored
pub fn symmetric_prim_graph() -> WeightedGraph {
    let mut graph = prim_graph();
    let mirrored: Vec<_> = graph.edges().copied().collect();
    for edge in mirrored {
        graph
            .add_edge(edge.destination, edge.source, edge.weight)
            .unwrap();
    }
    graph
}

pub fn kruskal_graph() -> WeightedGraph {
    let mut graph = WeightedGraph::with_capacity(4);
    for (u, v, w) in [
        (0, 1, 10.0),
        (0, 2, 6.0),
        (0, 3, 5.0),
        (1, 3, 15.0),
        (2, 3, 4.0),
    ] {
        graph.add_edge(u, v, w).unwrap();
    }
    graph
}
