//! Graph algorithms for graphkit
//!
//! Every algorithm is a stateless function over a [`GraphView`]; none of them
//! mutates the graph.

pub mod common;
pub mod community;
pub mod mst;
pub mod pathfinding;
pub mod topology;
pub mod traversal;
pub mod union_find;

pub use common::{AlgoError, AlgoResult, EdgeWeight, GraphView, VertexIdx};
pub use community::{connected_components, is_bipartite};
pub use mst::{kruskal_mst, prim_mst, prim_mst_from, MstResult};
pub use pathfinding::{
    dijkstra, floyd_warshall, shortest_path, vertices_n_away, DistanceMatrix, PathResult,
};
pub use topology::{contains_cycle, topological_sort};
pub use traversal::{bfs, dfs, dfs_path, Bfs, Dfs};
pub use union_find::UnionFind;
