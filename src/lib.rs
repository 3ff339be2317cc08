//! Graphkit
//!
//! An in-memory graph abstract data type with a standard library of graph
//! algorithms.
//!
//! # Architecture
//!
//! - [`graph`]: the graph store. Vertices are labelled, edges are directed or
//!   undirected per graph, and the edge-weight model is a type parameter
//!   (`Graph` is unweighted, `WeightedGraph` carries `f64` weights).
//! - [`algo`]: stateless algorithms from the `graphkit-algorithms` crate. They
//!   take the graph by shared reference through the `GraphView` capability
//!   trait and never mutate it.
//! - [`format`]: the line-oriented graph description format (`D`/`G` header,
//!   vertex line, one edge per line).
//!
//! ## Algorithms
//!
//! - BFS and DFS traversal (lazy iterators), DFS path search
//! - Unweighted shortest path and exact-distance neighbor queries
//! - Bipartiteness and connected components
//! - Cycle detection and topological sort
//! - Kruskal and Prim minimum spanning trees, union-find
//! - Dijkstra and Floyd-Warshall shortest paths
//!
//! ## Example Usage
//!
//! ```rust
//! use graphkit::algo;
//! use graphkit::graph::{Graph, WeightedGraph};
//!
//! let mut graph: Graph = Graph::directed();
//! for label in ["1", "2", "3", "4"] {
//!     graph.add_vertex(label).unwrap();
//! }
//! graph.add_edge("1", "2").unwrap();
//! graph.add_edge("2", "3").unwrap();
//! graph.add_edge("3", "4").unwrap();
//!
//! let path = algo::shortest_path(&graph, "1", "4").unwrap();
//! assert_eq!(path, Some(vec!["1", "2", "3", "4"]));
//!
//! let mut roads = WeightedGraph::undirected();
//! for label in ["A", "B", "C"] {
//!     roads.add_vertex(label).unwrap();
//! }
//! roads.add_edge("A", "B", 1.0).unwrap();
//! roads.add_edge("B", "C", 2.0).unwrap();
//! roads.add_edge("A", "C", 5.0).unwrap();
//!
//! assert_eq!(algo::kruskal_mst(&roads).total_weight, 3.0);
//! ```

pub mod config;
pub mod format;
pub mod graph;

pub use graphkit_algorithms as algo;

pub use algo::{AlgoError, AlgoResult, GraphView};
pub use config::GraphConfig;
pub use format::FormatError;
pub use graph::{Edge, Graph, GraphError, GraphMode, GraphResult, Label, Vertex, VertexId, WeightedGraph};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
