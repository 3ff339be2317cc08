//! In-memory graph storage implementation
//!
//! Vertices live in an arena indexed by [`VertexId`]; labels resolve to slots
//! through a hash index. Each vertex's adjacency is an insertion-ordered map
//! keyed by destination slot, so there are no owning references between
//! vertices and no dangling neighbors.

use super::edge::Edge;
use super::types::{GraphMode, Label, VertexId};
use super::vertex::Vertex;
use crate::config::GraphConfig;
use graphkit_algorithms::{EdgeWeight, GraphView, VertexIdx};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Vertex {0} not found")]
    VertexNotFound(Label),

    #[error("Vertex {0} already exists")]
    VertexAlreadyExists(Label),

    #[error("Invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight { from: Label, to: Label, weight: f64 },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory graph storage
///
/// - labels: VertexId -> Label (arena)
/// - index: Label -> VertexId
/// - adjacency: VertexId -> (destination slot -> weight)
///
/// Adding an edge between an ordered pair that is already connected
/// overwrites its weight; it never creates a parallel edge. Undirected edges
/// are stored in both endpoints with the same weight.
#[derive(Clone)]
pub struct Graph<W = ()> {
    mode: GraphMode,
    labels: Vec<Label>,
    index: FxHashMap<Label, VertexId>,
    adjacency: Vec<IndexMap<VertexIdx, W>>,
}

/// Graph whose edges carry a numeric weight
pub type WeightedGraph = Graph<f64>;

impl<W: EdgeWeight> Graph<W> {
    /// Create a new empty graph
    pub fn new(mode: GraphMode) -> Self {
        Graph {
            mode,
            labels: Vec::new(),
            index: FxHashMap::default(),
            adjacency: Vec::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphMode::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphMode::Undirected)
    }

    /// Create a graph from a configuration, pre-allocating vertex storage
    pub fn with_config(config: &GraphConfig) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(config.vertex_capacity);

        Graph {
            mode: config.mode,
            labels: Vec::with_capacity(config.vertex_capacity),
            index,
            adjacency: Vec::with_capacity(config.vertex_capacity),
        }
    }

    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    pub fn is_directed(&self) -> bool {
        self.mode.is_directed()
    }

    /// Add a vertex; duplicate labels are rejected
    pub fn add_vertex(&mut self, label: impl Into<Label>) -> GraphResult<VertexId> {
        let label = label.into();
        if self.index.contains_key(&label) {
            debug!("Rejecting duplicate vertex {}", label);
            return Err(GraphError::VertexAlreadyExists(label));
        }

        let id = VertexId::new(self.labels.len());
        trace!("Added vertex {} at {}", label, id);
        self.index.insert(label.clone(), id);
        self.labels.push(label);
        self.adjacency.push(IndexMap::new());
        Ok(id)
    }

    /// Get a vertex by label
    pub fn get_vertex(&self, label: &str) -> Option<Vertex<'_, W>> {
        self.index.get(label).map(|&id| Vertex::new(self, id))
    }

    /// Get a vertex by arena slot
    pub fn vertex(&self, id: VertexId) -> Option<Vertex<'_, W>> {
        (id.index() < self.labels.len()).then(|| Vertex::new(self, id))
    }

    /// Check if a vertex exists
    pub fn contains_id(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Get all vertices in insertion order
    pub fn get_vertices(&self) -> Vec<Vertex<'_, W>> {
        (0..self.labels.len())
            .map(|idx| Vertex::new(self, VertexId::new(idx)))
            .collect()
    }

    /// Add an edge carrying `weight`.
    ///
    /// Both endpoints are validated before anything is stored, so an
    /// undirected edge is inserted in both directions or not at all.
    pub fn insert_edge(&mut self, from: &str, to: &str, weight: W) -> GraphResult<()> {
        let u = self.resolve(from)?;
        let v = self.resolve(to)?;

        if !weight.is_finite() {
            return Err(GraphError::InvalidWeight {
                from: Label::new(from),
                to: Label::new(to),
                weight: weight.value(),
            });
        }

        self.adjacency[u.index()].insert(v.index(), weight);
        if !self.is_directed() {
            self.adjacency[v.index()].insert(u.index(), weight);
        }
        trace!("Added edge {} -> {} ({:?})", from, to, weight);
        Ok(())
    }

    /// Weight of the edge `from -> to`, if present
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<W> {
        let u = self.index.get(from)?;
        let v = self.index.get(to)?;
        self.adjacency[u.index()].get(&v.index()).copied()
    }

    /// All edges; an undirected edge is reported once, from its lower slot
    pub fn edges(&self) -> Vec<Edge<'_, W>> {
        let directed = self.is_directed();
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, targets)| {
                targets
                    .iter()
                    .filter(move |&(&v, _)| directed || u <= v)
                    .map(move |(&v, &weight)| Edge {
                        source: self.labels[u].as_str(),
                        target: self.labels[v].as_str(),
                        weight,
                    })
            })
            .collect()
    }

    /// Get total number of vertices
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Get total number of edges (undirected edges counted once)
    pub fn edge_count(&self) -> usize {
        if self.is_directed() {
            self.adjacency.iter().map(IndexMap::len).sum()
        } else {
            self.adjacency
                .iter()
                .enumerate()
                .map(|(u, targets)| targets.keys().filter(|&&v| u <= v).count())
                .sum()
        }
    }

    pub(crate) fn label_of(&self, id: VertexId) -> &str {
        self.labels[id.index()].as_str()
    }

    pub(crate) fn adjacency_of(&self, id: VertexId) -> &IndexMap<VertexIdx, W> {
        &self.adjacency[id.index()]
    }

    fn resolve(&self, label: &str) -> GraphResult<VertexId> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::VertexNotFound(Label::new(label)))
    }
}

impl Graph<()> {
    /// Add an unweighted edge
    pub fn add_edge(&mut self, from: &str, to: &str) -> GraphResult<()> {
        self.insert_edge(from, to, ())
    }
}

impl Graph<f64> {
    /// Add a weighted edge
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> GraphResult<()> {
        self.insert_edge(from, to, weight)
    }

    /// Neighbors of `label` together with the connecting edge weights
    pub fn get_neighbors_with_weights(&self, label: &str) -> GraphResult<Vec<(Vertex<'_, f64>, f64)>> {
        let id = self.resolve(label)?;
        Ok(Vertex::new(self, id).neighbors_with_weights().collect())
    }
}

impl<W: EdgeWeight> Default for Graph<W> {
    fn default() -> Self {
        Self::with_config(&GraphConfig::default())
    }
}

impl<W: EdgeWeight> GraphView for Graph<W> {
    type Weight = W;

    fn is_directed(&self) -> bool {
        self.mode.is_directed()
    }

    fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    fn vertex_label(&self, idx: VertexIdx) -> &str {
        self.labels[idx].as_str()
    }

    fn vertex_index(&self, label: &str) -> Option<VertexIdx> {
        self.index.get(label).map(VertexId::index)
    }

    fn neighbors(&self, idx: VertexIdx) -> impl Iterator<Item = (VertexIdx, W)> + '_ {
        self.adjacency[idx].iter().map(|(&v, &weight)| (v, weight))
    }
}

impl<W: EdgeWeight> fmt::Display for Graph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph with vertices: [")?;
        for (i, vertex) in self.get_vertices().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", vertex)?;
        }
        write!(f, "]")
    }
}

impl<W: EdgeWeight> fmt::Debug for Graph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("mode", &self.mode)
            .field("vertices", &self.labels.len())
            .field("edges", &self.edge_count())
            .finish()
    }
}
