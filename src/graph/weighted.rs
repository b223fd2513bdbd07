use std::cell::OnceCell;
use std::collections::HashMap;

use crate::bail_invalid;
use crate::error::{GraphkitError, Result};
use crate::graph::types::{Edge, NodeId, Weight, DEFAULT_WEIGHT};

/// Directed weighted graph in adjacency-list form.
///
/// Outgoing edges keep insertion order per source, and sources keep the order
/// in which they first gained an edge; traversal and edge enumeration are
/// deterministic as a result.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    adjacency: HashMap<NodeId, Vec<Edge>>,
    sources: Vec<NodeId>,
    capacity: Option<usize>,
    node_bound: usize,
    matrix: OnceCell<Vec<Vec<Weight>>>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph bounded to `vertices` nodes
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            capacity: Some(vertices),
            ..Self::default()
        }
    }

    /// Build from a dense square matrix.
    ///
    /// Capacity is the row count. Zero and infinite entries mean "no edge".
    pub fn from_adjacency_matrix(matrix: &[Vec<Weight>]) -> Result<Self> {
        let n = matrix.len();
        if let Some(row) = matrix.iter().find(|row| row.len() != n) {
            bail_invalid!(
                "adjacency matrix",
                format!("row of length {} in a {}x{} matrix", row.len(), n, n)
            );
        }

        let mut graph = Self::with_capacity(n);
        for (source, row) in matrix.iter().enumerate() {
            for (destination, &weight) in row.iter().enumerate() {
                if weight != 0.0 && weight.is_finite() {
                    graph.add_edge(source, destination, weight)?;
                }
            }
        }
        Ok(graph)
    }

    /// Add an edge unless a structurally identical one already exists.
    ///
    /// The duplicate check is a linear scan of the source's edges. With a
    /// capacity declared, both endpoints must be below it and a new source key
    /// is refused once the number of source keys has reached it.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        destination: NodeId,
        weight: Weight,
    ) -> Result<()> {
        if let Some(capacity) = self.capacity {
            let new_source = !self.adjacency.contains_key(&source);
            if source >= capacity
                || destination >= capacity
                || (new_source && self.sources.len() >= capacity)
            {
                tracing::debug!(source, destination, capacity, "vertex capacity exceeded");
                return Err(GraphkitError::CapacityExceeded { capacity });
            }
        }

        let edge = Edge::new(source, destination, weight);
        let sources = &mut self.sources;
        let edges = self.adjacency.entry(source).or_insert_with(|| {
            sources.push(source);
            Vec::new()
        });
        if edges.contains(&edge) {
            return Ok(());
        }
        edges.push(edge);

        self.node_bound = self.node_bound.max(source.max(destination) + 1);
        self.invalidate_matrix();
        Ok(())
    }

    /// Add an edge with the default weight of 1
    pub fn add_unit_edge(&mut self, source: NodeId, destination: NodeId) -> Result<()> {
        self.add_edge(source, destination, DEFAULT_WEIGHT)
    }

    /// Node count: the declared capacity, or one past the largest id seen
    pub fn len(&self) -> usize {
        self.capacity.unwrap_or(self.node_bound)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Outgoing edges of `node` in insertion order
    pub fn neighbors(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Source keys in first-insertion order
    pub fn sources(&self) -> &[NodeId] {
        &self.sources
    }

    /// Every edge, grouped by source in first-insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.sources
            .iter()
            .flat_map(move |&source| self.neighbors(source).iter())
    }

    /// Edges ascending by weight; ties keep enumeration order
    pub fn sorted_edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self.edges().copied().collect();
        edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));
        edges
    }

    /// Dense `len() x len()` view, built on first access and cached.
    ///
    /// Absent edges are `INFINITY` and the diagonal is `0` unless a self-loop
    /// overrides it. `add_edge` drops the cache.
    pub fn adjacency_matrix(&self) -> &[Vec<Weight>] {
        self.matrix.get_or_init(|| {
            let n = self.len();
            tracing::debug!(nodes = n, "materializing adjacency matrix");
            let mut matrix = vec![vec![f64::INFINITY; n]; n];
            for (i, row) in matrix.iter_mut().enumerate() {
                row[i] = 0.0;
            }
            for edge in self.edges() {
                matrix[edge.source][edge.destination] = edge.weight;
            }
            matrix
        })
    }

    pub fn invalidate_matrix(&mut self) {
        self.matrix = OnceCell::new();
    }

    pub(crate) fn check_node(&self, node: NodeId) -> Result<()> {
        if node >= self.len() {
            bail_invalid!(
                "node",
                format!("{} (graph has {} nodes)", node, self.len())
            );
        }
        Ok(())
    }
}
