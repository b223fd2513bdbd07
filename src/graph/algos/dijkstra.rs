use crate::config::RelaxPriority;
use crate::error::Result;
use crate::graph::types::{NodeId, Weight};
use crate::graph::WeightedGraph;
use crate::heap::IndexedMinHeap;

/// Single-source shortest distances using the default relax priority.
///
/// See [`dijkstra_with`].
pub fn dijkstra(graph: &WeightedGraph, start: NodeId) -> Result<Vec<Weight>> {
    dijkstra_with(graph, start, RelaxPriority::default())
}

/// Single-source shortest distances indexed by node id.
///
/// Every node is seeded into the heap up front (start at 0, the rest at
/// infinity). Popped nodes are final; only destinations still in the heap are
/// relaxed, and a strictly shorter path re-pushes the destination.
///
/// `RelaxPriority::EdgeWeight` pushes the relaxing edge's weight rather than
/// the new distance. That ordering can finalize a node before a shorter path
/// through a cheaper-to-reach node is seen; `RelaxPriority::Distance` is the
/// textbook ordering. Unreachable nodes stay at infinity in both modes.
#[tracing::instrument(skip(graph), fields(nodes = graph.len(), edges = graph.edge_count()))]
pub fn dijkstra_with(
    graph: &WeightedGraph,
    start: NodeId,
    relax: RelaxPriority,
) -> Result<Vec<Weight>> {
    graph.check_node(start)?;
    let start_time = std::time::Instant::now();

    let mut distance = vec![f64::INFINITY; graph.len()];
    distance[start] = 0.0;
    let mut heap = IndexedMinHeap::build(distance.iter().copied().enumerate());

    while let Ok(node) = heap.pop() {
        for edge in graph.neighbors(node) {
            let destination = edge.destination;
            let candidate = distance[node] + edge.weight;
            if heap.contains(&destination) && candidate < distance[destination] {
                distance[destination] = candidate;
                let priority = match relax {
                    RelaxPriority::EdgeWeight => edge.weight,
                    RelaxPriority::Distance => candidate,
                };
                heap.push(destination, priority);
            }
        }
    }

    crate::trace_time!(start_time, "dijkstra");
    Ok(distance)
}
