//! Graph construction configuration

use crate::graph::GraphMode;
use serde::{Deserialize, Serialize};

/// Settings used by [`Graph::with_config`](crate::graph::Graph::with_config)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Directed or undirected
    pub mode: GraphMode,
    /// Number of vertices to pre-allocate storage for
    pub vertex_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            mode: GraphMode::Directed,
            vertex_capacity: 0,
        }
    }
}

impl GraphConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
