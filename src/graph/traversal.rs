use crate::collections::{Queue, Stack};
use crate::error::Result;
use crate::graph::types::NodeId;
use crate::graph::WeightedGraph;

impl WeightedGraph {
    /// Breadth-first visitation order from `source`.
    ///
    /// Unreachable nodes are absent from the result.
    #[tracing::instrument(skip(self), fields(nodes = self.len()))]
    pub fn bfs(&self, source: NodeId) -> Result<Vec<NodeId>> {
        self.check_node(source)?;

        let mut order = Vec::new();
        let mut visited = vec![false; self.len()];
        let mut queue = Queue::new();

        visited[source] = true;
        queue.enqueue(source);

        while let Ok(node) = queue.dequeue() {
            order.push(node);
            for edge in self.neighbors(node) {
                let next = edge.destination;
                if !visited[next] {
                    visited[next] = true;
                    queue.enqueue(next);
                }
            }
        }

        Ok(order)
    }

    /// Depth-first visitation order from `source`.
    ///
    /// Yields the same order as a recursive first-edge-first walk. Each stack
    /// frame holds a node and the index of its next edge to try.
    #[tracing::instrument(skip(self), fields(nodes = self.len()))]
    pub fn dfs(&self, source: NodeId) -> Result<Vec<NodeId>> {
        self.check_node(source)?;

        let mut order = vec![source];
        let mut visited = vec![false; self.len()];
        let mut stack: Stack<(NodeId, usize)> = Stack::new();

        visited[source] = true;
        stack.push((source, 0));

        while let Some(frame) = stack.peek_mut() {
            let (node, cursor) = *frame;
            match self.neighbors(node).get(cursor) {
                Some(edge) => {
                    frame.1 += 1;
                    let next = edge.destination;
                    if !visited[next] {
                        visited[next] = true;
                        order.push(next);
                        stack.push((next, 0));
                    }
                }
                None => {
                    stack.pop()?;
                }
            }
        }

        Ok(order)
    }
}
