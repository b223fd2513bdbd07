use std::collections::HashSet;

use crate::graph::types::{Edge, NodeId, Weight};
use crate::graph::WeightedGraph;
use crate::heap::IndexedMinHeap;

/// Prim's MST driven by the indexed heap, O((V + E) log V).
///
/// Grows from node 0. For each popped node, an outgoing edge whose
/// destination is still in the heap and beats that destination's key becomes
/// the destination's tree edge. Disconnected input is not an error: nodes of
/// other components surface at infinite key, grow their own trees, and the
/// resulting partial forest is returned once the heap drains.
#[tracing::instrument(skip(graph), fields(nodes = graph.len(), edges = graph.edge_count()))]
pub fn prim_mst_with_heap(graph: &WeightedGraph) -> HashSet<Edge> {
    let n = graph.len();
    if n == 0 {
        return HashSet::new();
    }

    let mut keys = vec![f64::INFINITY; n];
    keys[0] = 0.0;
    let mut heap = IndexedMinHeap::build(keys.iter().copied().enumerate());
    let mut tree_edges: Vec<Option<Edge>> = vec![None; n];

    while let Ok(node) = heap.pop() {
        for edge in graph.neighbors(node) {
            let destination = edge.destination;
            if heap.contains(&destination) && edge.weight < keys[destination] {
                keys[destination] = edge.weight;
                heap.push(destination, edge.weight);
                tree_edges[destination] = Some(*edge);
            }
        }
    }

    collect_tree(tree_edges, n)
}

/// Prim's MST with a linear minimum scan, O(V^2).
///
/// Runs until every source key of the graph has joined the tree. Ties in the
/// scan go to the lowest node id. The graph must hold both directions of each
/// undirected edge; nothing here enforces that.
#[tracing::instrument(skip(graph), fields(nodes = graph.len(), edges = graph.edge_count()))]
pub fn prim_mst(graph: &WeightedGraph) -> HashSet<Edge> {
    let n = graph.len();
    if n == 0 {
        return HashSet::new();
    }

    let mut keys = vec![f64::INFINITY; n];
    keys[0] = 0.0;
    let mut in_mst = vec![false; n];
    let mut tree_edges: Vec<Option<Edge>> = vec![None; n];
    let sources: HashSet<NodeId> = graph.sources().iter().copied().collect();
    let mut pending_sources = sources.len();

    while pending_sources > 0 {
        let Some(node) = min_key_vertex(&keys, &in_mst) else {
            break;
        };
        in_mst[node] = true;
        if sources.contains(&node) {
            pending_sources -= 1;
        }

        for edge in graph.neighbors(node) {
            let destination = edge.destination;
            if !in_mst[destination] && edge.weight < keys[destination] {
                keys[destination] = edge.weight;
                tree_edges[destination] = Some(*edge);
            }
        }
    }

    collect_tree(tree_edges, n)
}

/// First vertex outside the tree with the minimum key
fn min_key_vertex(keys: &[Weight], in_mst: &[bool]) -> Option<NodeId> {
    (0..keys.len())
        .filter(|&node| !in_mst[node])
        .min_by(|&a, &b| keys[a].total_cmp(&keys[b]))
}

fn collect_tree(tree_edges: Vec<Option<Edge>>, n: usize) -> HashSet<Edge> {
    let tree: HashSet<Edge> = tree_edges.into_iter().flatten().collect();
    if tree.len() + 1 < n {
        tracing::debug!(
            tree_edges = tree.len(),
            nodes = n,
            "graph is disconnected; returning partial forest"
        );
    }
    tree
}
