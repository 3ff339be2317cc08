//! Connectivity algorithms
//!
//! Connected components and bipartiteness. Both treat a directed graph as its
//! underlying undirected graph, and both restart from every unclaimed vertex
//! in vertex order so disconnected graphs are covered.

use super::common::{undirected_adjacency, GraphView, VertexIdx};
use std::collections::VecDeque;
use tracing::debug;

/// Partition all vertices into connected components.
///
/// Components are ordered by their first vertex; vertices inside a component
/// are in BFS discovery order.
pub fn connected_components<'g, G: GraphView>(graph: &'g G) -> Vec<Vec<&'g str>> {
    let adjacency = undirected_adjacency(graph);
    let n = graph.vertex_count();
    let mut claimed = vec![false; n];
    let mut components = Vec::new();

    for root in 0..n {
        if claimed[root] {
            continue;
        }

        let mut component = Vec::new();
        let mut queue = VecDeque::from([root]);
        claimed[root] = true;

        while let Some(u) = queue.pop_front() {
            component.push(graph.vertex_label(u));
            for &v in &adjacency[u] {
                if !claimed[v] {
                    claimed[v] = true;
                    queue.push_back(v);
                }
            }
        }

        components.push(component);
    }

    debug!("Found {} connected components over {} vertices", components.len(), n);
    components
}

/// Whether the graph admits a 2-coloring.
///
/// Every component is colored independently; a self-loop makes the graph
/// non-bipartite.
pub fn is_bipartite<G: GraphView>(graph: &G) -> bool {
    let adjacency = undirected_adjacency(graph);
    let n = graph.vertex_count();
    let mut color: Vec<Option<bool>> = vec![None; n];

    for root in 0..n {
        if color[root].is_some() {
            continue;
        }

        color[root] = Some(false);
        let mut queue: VecDeque<VertexIdx> = VecDeque::from([root]);

        while let Some(u) = queue.pop_front() {
            let side = color[u] == Some(true);
            for &v in &adjacency[u] {
                match color[v] {
                    None => {
                        color[v] = Some(!side);
                        queue.push_back(v);
                    }
                    Some(other) if other == side => {
                        debug!(
                            "Not bipartite: {} and {} share a color",
                            graph.vertex_label(u),
                            graph.vertex_label(v)
                        );
                        return false;
                    }
                    Some(_) => {}
                }
            }
        }
    }

    true
}
