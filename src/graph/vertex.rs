//! Vertex handle
//!
//! A [`Vertex`] is a non-owning reference into the graph arena. It is cheap to
//! copy and never outlives the graph it borrows.

use super::store::Graph;
use super::types::VertexId;
use graphkit_algorithms::EdgeWeight;
use std::fmt;

/// A vertex in the graph, borrowed from its store
pub struct Vertex<'g, W> {
    graph: &'g Graph<W>,
    id: VertexId,
}

impl<'g, W> Clone for Vertex<'g, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'g, W> Copy for Vertex<'g, W> {}

impl<'g, W: EdgeWeight> Vertex<'g, W> {
    pub(crate) fn new(graph: &'g Graph<W>, id: VertexId) -> Self {
        Vertex { graph, id }
    }

    /// Arena slot of this vertex
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn label(&self) -> &'g str {
        self.graph.label_of(self.id)
    }

    /// Number of outgoing adjacency entries
    pub fn degree(&self) -> usize {
        self.graph.adjacency_of(self.id).len()
    }

    /// Adjacent vertices, in edge insertion order
    pub fn neighbors(&self) -> impl Iterator<Item = Vertex<'g, W>> + 'g {
        let graph = self.graph;
        graph
            .adjacency_of(self.id)
            .keys()
            .map(move |&idx| Vertex::new(graph, VertexId::new(idx)))
    }

    /// Adjacent vertices with the weight of the connecting edge
    pub fn neighbors_with_weights(&self) -> impl Iterator<Item = (Vertex<'g, W>, W)> + 'g {
        let graph = self.graph;
        graph
            .adjacency_of(self.id)
            .iter()
            .map(move |(&idx, &weight)| (Vertex::new(graph, VertexId::new(idx)), weight))
    }

    /// Collected neighbors
    pub fn get_neighbors(&self) -> Vec<Vertex<'g, W>> {
        self.neighbors().collect()
    }

    /// Check whether there is an edge from this vertex to `label`
    pub fn is_adjacent_to(&self, label: &str) -> bool {
        self.neighbors().any(|v| v.label() == label)
    }
}

impl<'g, W> PartialEq for Vertex<'g, W> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl<'g, W> Eq for Vertex<'g, W> {}

impl<'g, W: EdgeWeight> fmt::Display for Vertex<'g, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} adjacent to [", self.label())?;
        for (i, neighbor) in self.neighbors().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", neighbor.label())?;
        }
        write!(f, "]")
    }
}

impl<'g, W: EdgeWeight> fmt::Debug for Vertex<'g, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("id", &self.id)
            .field("label", &self.label())
            .field("degree", &self.degree())
            .finish()
    }
}
