use crate::error::{GraphkitError, Result};
use crate::graph::WeightedGraph;
use crate::union_find::UnionFind;

impl WeightedGraph {
    /// Union-find cycle check over every edge in enumeration order.
    ///
    /// Edge direction is ignored: `0 -> 1, 0 -> 2, 1 -> 2` reports a cycle
    /// even though no directed cycle exists. A self-loop is malformed input
    /// and fails with `SelfLoop` unless a cycle was already found by an
    /// earlier edge.
    #[tracing::instrument(skip(self), fields(nodes = self.len(), edges = self.edge_count()))]
    pub fn contains_cycle(&self) -> Result<bool> {
        let mut sets = UnionFind::new(self.len());

        for edge in self.edges() {
            if edge.is_self_loop() {
                return Err(GraphkitError::SelfLoop { node: edge.source });
            }
            let source_root = sets.find(edge.source);
            let destination_root = sets.find(edge.destination);
            if source_root == destination_root {
                tracing::debug!(
                    source = edge.source,
                    destination = edge.destination,
                    "cycle closed"
                );
                return Ok(true);
            }
            sets.union(source_root, destination_root);
        }

        Ok(false)
    }
}
