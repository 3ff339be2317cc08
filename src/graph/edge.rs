//! Edge view
//!
//! Edges are not stored as objects; they are relationships recorded in each
//! vertex's adjacency. [`Edge`] is the borrowed record handed out when listing
//! them.

use serde::Serialize;

/// An edge between two vertices of the same graph
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge<'g, W> {
    /// Source vertex (edge goes FROM this vertex)
    pub source: &'g str,

    /// Target vertex (edge goes TO this vertex)
    pub target: &'g str,

    /// Edge weight; `()` for unweighted graphs
    pub weight: W,
}

impl<'g, W> Edge<'g, W> {
    /// Check if this edge connects the given vertices in this direction
    pub fn connects(&self, source: &str, target: &str) -> bool {
        self.source == source && self.target == target
    }

    /// Check if this is a self-loop
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
