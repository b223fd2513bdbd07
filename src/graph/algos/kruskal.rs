use crate::graph::types::Edge;
use crate::graph::WeightedGraph;
use crate::union_find::UnionFind;

/// Kruskal's MST as an ordered edge list.
///
/// Edges are taken ascending by weight, ties in enumeration order, skipping
/// any edge whose endpoints are already joined. Stops once `len() - 1` edges
/// are accepted.
#[tracing::instrument(skip(graph), fields(nodes = graph.len(), edges = graph.edge_count()))]
pub fn kruskal_mst(graph: &WeightedGraph) -> Vec<Edge> {
    let target = graph.len().saturating_sub(1);
    let mut tree = Vec::with_capacity(target);
    if target == 0 {
        return tree;
    }

    let mut sets = UnionFind::new(graph.len());
    for edge in graph.sorted_edges() {
        let source_root = sets.find(edge.source);
        let destination_root = sets.find(edge.destination);
        if source_root == destination_root {
            continue;
        }
        tree.push(edge);
        if tree.len() == target {
            tracing::debug!(accepted = tree.len(), "spanning tree complete");
            break;
        }
        sets.union(source_root, destination_root);
    }

    tree
}
