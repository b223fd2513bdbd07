//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Library settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlgoConfig {
    /// Graph construction settings
    #[serde(default)]
    pub graph: GraphSettings,

    /// Dijkstra settings
    #[serde(default)]
    pub dijkstra: DijkstraSettings,
}

/// Settings applied to graphs built through [`AlgoConfig::new_graph`]
///
/// [`AlgoConfig::new_graph`]: super::AlgoConfig::new_graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSettings {
    /// Declared vertex bound (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertex_capacity: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DijkstraSettings {
    /// Priority pushed when a shorter path is found
    #[serde(default)]
    pub relax_priority: RelaxPriority,
}

/// Priority used when Dijkstra re-pushes a relaxed destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelaxPriority {
    /// Push the weight of the relaxing edge (reference behavior)
    #[default]
    EdgeWeight,
    /// Push the new tentative distance (textbook Dijkstra)
    Distance,
}
