use graphkit::WeightedGraph;

#[allow(dead_code)]
pub const INF: f64 = f64::INFINITY;

/// Build a graph from `(source, destination, weight)` triples
#[allow(dead_code)]
pub fn graph_from(capacity: Option<usize>, edges: &[(usize, usize, f64)]) -> WeightedGraph {
    let mut graph = match capacity {
        Some(capacity) => WeightedGraph::with_capacity(capacity),
        None => WeightedGraph::new(),
    };
    for &(source, destination, weight) in edges {
        graph
            .add_edge(source, destination, weight)
            .expect("fixture edge should fit the graph");
    }
    graph
}

/// Same as `graph_from`, adding every edge in both directions
#[allow(dead_code)]
pub fn undirected_graph(capacity: usize, edges: &[(usize, usize, f64)]) -> WeightedGraph {
    let mirrored: Vec<_> = edges
        .iter()
        .flat_map(|&(u, v, w)| [(u, v, w), (v, u, w)])
        .collect();
    graph_from(Some(capacity), &mirrored)
}

#[allow(dead_code)]
pub fn nine_node_graph() -> WeightedGraph {
    let matrix = vec![
        vec![0.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 8.0, 0.0],
        vec![4.0, 0.0, 8.0, 0.0, 0.0, 0.0, 0.0, 11.0, 0.0],
        vec![0.0, 8.0, 0.0, 7.0, 0.0, 4.0, 0.0, 0.0, 2.0],
        vec![0.0, 0.0, 7.0, 0.0, 9.0, 14.0, 0.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0, 9.0, 0.0, 10.0, 0.0, 0.0, 0.0],
        vec![0.0, 0.0, 4.0, 14.0, 10.0, 0.0, 2.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 1.0, 6.0],
        vec![8.0, 11.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 7.0],
        vec![0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 6.0, 7.0, 0.0],
    ];
    WeightedGraph::from_adjacency_matrix(&matrix).expect("square fixture matrix")
}

#[allow(dead_code)]
pub fn traversal_graph() -> WeightedGraph {
    let edges: Vec<_> = [
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
    ]
    .into_iter()
    .map(|(u, v)| (u, v, 1.0))
    .collect();
    graph_from(None, &edges)
}
