use serde::Serialize;
use std::hash::{Hash, Hasher};

/// Dense node identifier in `[0, n)`
pub type NodeId = usize;

/// Edge weight; `f64::INFINITY` marks an absent edge or unreachable node
pub type Weight = f64;

/// Weight used by [`WeightedGraph::add_unit_edge`]
///
/// [`WeightedGraph::add_unit_edge`]: super::WeightedGraph::add_unit_edge
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// A directed weighted edge.
///
/// Equality and hashing are structural, with the weight compared by bit
/// pattern so edges can live in hash sets. `-0.0` and `0.0` are the same
/// weight.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Edge {
    pub source: NodeId,
    pub destination: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeId, destination: NodeId, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight: if weight == 0.0 { 0.0 } else { weight },
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.destination == other.destination
            && weight_bits(self.weight) == weight_bits(other.weight)
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.destination.hash(state);
        weight_bits(self.weight).hash(state);
    }
}

fn weight_bits(weight: Weight) -> u64 {
    if weight == 0.0 {
        0.0_f64.to_bits()
    } else {
        weight.to_bits()
    }
}

impl From<(NodeId, NodeId, Weight)> for Edge {
    fn from((source, destination, weight): (NodeId, NodeId, Weight)) -> Self {
        Self::new(source, destination, weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Edge::new(0, 1, 2.0), Edge::from((0, 1, 2.0)));
        assert_ne!(Edge::new(0, 1, 2.0), Edge::new(0, 1, 3.0));
        assert_ne!(Edge::new(0, 1, 2.0), Edge::new(1, 0, 2.0));
    }

    #[test]
    fn test_signed_zero_weights_are_equal() {
        let negative = Edge::new(0, 1, -0.0);
        assert_eq!(negative, Edge::new(0, 1, 0.0));
        assert!(negative.weight.is_sign_positive());

        let literal = Edge {
            source: 0,
            destination: 1,
            weight: -0.0,
        };
        let edges: HashSet<Edge> = [literal, Edge::new(0, 1, 0.0)].into_iter().collect();
        assert_eq!(edges.len(), 1);
    }

    #[test]
    fn test_hash_set_dedups() {
        let edges: HashSet<Edge> = [
            Edge::new(0, 1, 2.0),
            Edge::new(0, 1, 2.0),
            Edge::new(1, 2, 3.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn test_self_loop() {
        assert!(Edge::new(3, 3, 1.0).is_self_loop());
        assert!(!Edge::new(3, 4, 1.0).is_self_loop());
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(Edge::new(2, 3, 4.0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"source": 2, "destination": 3, "weight": 4.0})
        );
    }
}
