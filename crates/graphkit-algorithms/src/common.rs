//! Shared utilities for graph algorithms
//!
//! Algorithms never see a concrete graph type. They run against [`GraphView`], a
//! read-only, dense, integer-indexed view of the topology: every vertex lives in
//! a slot `0..vertex_count()` and neighbors are reported as slot indices.

use std::fmt;
use thiserror::Error;

/// Dense vertex index (arena slot)
pub type VertexIdx = usize;

/// Errors reported by the algorithm library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgoError {
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    #[error("Graph contains a cycle")]
    CycleDetected,

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: String, to: String, weight: f64 },

    #[error("Graph contains a negative-weight cycle")]
    NegativeCycle,

    #[error("Graph is not connected: reached {reached} of {total} vertices")]
    Disconnected { reached: usize, total: usize },

    #[error("{0} requires a directed graph")]
    RequiresDirected(&'static str),

    #[error("{0} requires an undirected graph")]
    RequiresUndirected(&'static str),
}

pub type AlgoResult<T> = Result<T, AlgoError>;

/// Edge weight model.
///
/// `()` is the unweighted model where every edge costs 1.0.
pub trait EdgeWeight: Copy + fmt::Debug {
    /// Numeric value used by weighted algorithms
    fn value(&self) -> f64;

    /// Whether the weight is a real number (neither NaN nor infinite)
    fn is_finite(&self) -> bool {
        self.value().is_finite()
    }
}

impl EdgeWeight for () {
    fn value(&self) -> f64 {
        1.0
    }
}

impl EdgeWeight for f64 {
    fn value(&self) -> f64 {
        *self
    }
}

impl EdgeWeight for f32 {
    fn value(&self) -> f64 {
        f64::from(*self)
    }
}

/// Read-only capability set every graph store exposes to the algorithms.
pub trait GraphView {
    type Weight: EdgeWeight;

    /// Whether edges are one-way
    fn is_directed(&self) -> bool;

    /// Number of vertices; valid indices are `0..vertex_count()`
    fn vertex_count(&self) -> usize;

    /// Label of the vertex stored at `idx`
    fn vertex_label(&self, idx: VertexIdx) -> &str;

    /// Slot of the vertex labelled `label`, if present
    fn vertex_index(&self, label: &str) -> Option<VertexIdx>;

    /// Outgoing adjacency of `idx` in a stable order
    fn neighbors(&self, idx: VertexIdx) -> impl Iterator<Item = (VertexIdx, Self::Weight)> + '_;
}

/// Resolve a label or fail with [`AlgoError::VertexNotFound`]
pub(crate) fn resolve<G: GraphView>(graph: &G, label: &str) -> AlgoResult<VertexIdx> {
    graph
        .vertex_index(label)
        .ok_or_else(|| AlgoError::VertexNotFound(label.to_string()))
}

/// Adjacency of the underlying undirected graph.
///
/// Undirected views already store both directions. For directed views every
/// reverse edge is appended; a pair connected both ways appears twice, which
/// the connectivity walks tolerate.
pub(crate) fn undirected_adjacency<G: GraphView>(graph: &G) -> Vec<Vec<VertexIdx>> {
    let n = graph.vertex_count();
    let mut adjacency: Vec<Vec<VertexIdx>> = (0..n)
        .map(|u| graph.neighbors(u).map(|(v, _)| v).collect())
        .collect();

    if graph.is_directed() {
        for u in 0..n {
            for (v, _) in graph.neighbors(u) {
                adjacency[v].push(u);
            }
        }
    }

    adjacency
}

/// Rebuild a path from a parent table, ending at `target`
pub(crate) fn reconstruct_path<'g, G: GraphView>(
    graph: &'g G,
    parent: &[Option<VertexIdx>],
    target: VertexIdx,
) -> Vec<&'g str> {
    let mut path = Vec::new();
    let mut curr = Some(target);
    while let Some(idx) = curr {
        path.push(graph.vertex_label(idx));
        curr = parent[idx];
    }
    path.reverse();
    path
}
