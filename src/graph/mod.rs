//! Graph store
//!
//! This module implements the vertex/adjacency model:
//! - Vertices identified by unique, caller-supplied labels
//! - Directed or undirected edges, fixed per graph
//! - Unweighted (`Graph`) and weighted (`WeightedGraph`) variants of one generic store
//! - Arena storage with label index; no deletion, vertices and edges only accumulate

pub mod edge;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use store::{Graph, GraphError, GraphResult, WeightedGraph};
pub use types::{GraphMode, Label, ParseModeError, VertexId};
pub use vertex::Vertex;
