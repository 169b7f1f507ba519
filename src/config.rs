//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use crate::error::{GraphError, Result};
use crate::graph::MAX_VERTICES;
use serde::{Deserialize, Serialize};

/// Largest graph the engine accepts by default. The weight matrix is dense,
/// so memory grows with the square of this value.
pub const DEFAULT_MAX_VERTICES: usize = 1024;

/// What `add_edge` does when the vertex pair already has an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateEdgePolicy {
    /// Overwrite the weight in the matrix and in both adjacency entries.
    /// Neighbor order is unchanged.
    #[default]
    Replace,
    /// Refuse the insert with `GraphError::DuplicateEdge`.
    Reject,
}

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound accepted by `create_graph`.
    pub max_vertices: usize,
    /// Duplicate edge handling for every graph the engine creates.
    pub duplicate_edges: DuplicateEdgePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            duplicate_edges: DuplicateEdgePolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a config from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject a `max_vertices` larger than any graph can hold.
    pub fn validate(&self) -> Result<()> {
        if self.max_vertices > MAX_VERTICES {
            return Err(GraphError::Config(format!(
                "max_vertices {} exceeds {MAX_VERTICES}",
                self.max_vertices
            )));
        }
        Ok(())
    }
}
