//! Library settings for graphkit
//!
//! Settings are plain TOML:
//!
//! ```toml
//! [graph]
//! vertex_capacity = 16
//!
//! [dijkstra]
//! relax_priority = "distance"
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{GraphkitError, Result};
use crate::graph::{algos, WeightedGraph};

pub use types::{AlgoConfig, DijkstraSettings, GraphSettings, RelaxPriority};

impl AlgoConfig {
    /// Parse settings from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded settings");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build an empty graph honoring the configured vertex capacity
    pub fn new_graph(&self) -> WeightedGraph {
        match self.graph.vertex_capacity {
            Some(capacity) => WeightedGraph::with_capacity(capacity),
            None => WeightedGraph::new(),
        }
    }

    /// Run Dijkstra with the configured relax priority
    pub fn dijkstra(&self, graph: &WeightedGraph, start: usize) -> Result<Vec<f64>> {
        algos::dijkstra_with(graph, start, self.dijkstra.relax_priority)
    }
}

impl std::str::FromStr for RelaxPriority {
    type Err = GraphkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "edge-weight" => Ok(RelaxPriority::EdgeWeight),
            "distance" => Ok(RelaxPriority::Distance),
            other => Err(GraphkitError::invalid_value("relax priority", other)),
        }
    }
}
