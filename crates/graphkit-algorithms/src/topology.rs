//! Graph topology analysis algorithms
//!
//! Cycle detection and topological ordering, both driven by an iterative
//! depth-first search so deep graphs do not exhaust the call stack.

use super::common::{AlgoError, AlgoResult, GraphView, VertexIdx};
use tracing::{debug, warn};

/// DFS vertex state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    /// On the current exploration path
    InProgress,
    Done,
}

struct Frame {
    vertex: VertexIdx,
    parent: Option<VertexIdx>,
    neighbors: Vec<VertexIdx>,
    next: usize,
}

impl Frame {
    fn new<G: GraphView>(graph: &G, vertex: VertexIdx, parent: Option<VertexIdx>) -> Self {
        Frame {
            vertex,
            parent,
            neighbors: graph.neighbors(vertex).map(|(v, _)| v).collect(),
            next: 0,
        }
    }
}

/// Postorder of a full directed DFS, or the first back edge `(u, v)` found.
///
/// A back edge reaches a vertex that is still in progress; reaching a vertex
/// that is already done is a cross or forward edge and is not a cycle.
fn directed_postorder<G: GraphView>(graph: &G) -> Result<Vec<VertexIdx>, (VertexIdx, VertexIdx)> {
    let n = graph.vertex_count();
    let mut color = vec![Color::Unvisited; n];
    let mut postorder = Vec::with_capacity(n);

    for root in 0..n {
        if color[root] != Color::Unvisited {
            continue;
        }

        color[root] = Color::InProgress;
        let mut stack = vec![Frame::new(graph, root, None)];

        while let Some(frame) = stack.last_mut() {
            if let Some(&next) = frame.neighbors.get(frame.next) {
                frame.next += 1;
                let current = frame.vertex;
                match color[next] {
                    Color::InProgress => return Err((current, next)),
                    Color::Unvisited => {
                        color[next] = Color::InProgress;
                        stack.push(Frame::new(graph, next, Some(current)));
                    }
                    Color::Done => {}
                }
            } else {
                let finished = frame.vertex;
                stack.pop();
                color[finished] = Color::Done;
                postorder.push(finished);
            }
        }
    }

    Ok(postorder)
}

/// First edge closing a cycle in an undirected graph.
///
/// The edge back to the DFS parent is the same undirected edge and is skipped;
/// a self-loop always counts.
fn undirected_cycle_edge<G: GraphView>(graph: &G) -> Option<(VertexIdx, VertexIdx)> {
    let n = graph.vertex_count();
    let mut visited = vec![false; n];

    for root in 0..n {
        if visited[root] {
            continue;
        }

        visited[root] = true;
        let mut stack = vec![Frame::new(graph, root, None)];

        while let Some(frame) = stack.last_mut() {
            if let Some(&next) = frame.neighbors.get(frame.next) {
                frame.next += 1;
                let current = frame.vertex;
                if frame.parent == Some(next) && next != current {
                    continue;
                }
                if visited[next] {
                    return Some((current, next));
                }
                visited[next] = true;
                stack.push(Frame::new(graph, next, Some(current)));
            } else {
                stack.pop();
            }
        }
    }

    None
}

/// Whether the graph contains a cycle.
///
/// Directed graphs use three-color DFS and report a cycle exactly when an edge
/// reaches a vertex on the current path. Undirected graphs report a cycle for a
/// self-loop or any edge that closes a loop other than the tree edge itself.
pub fn contains_cycle<G: GraphView>(graph: &G) -> bool {
    let cycle_edge = if graph.is_directed() {
        directed_postorder(graph).err()
    } else {
        undirected_cycle_edge(graph)
    };

    match cycle_edge {
        Some((u, v)) => {
            debug!(
                "Cycle closed by edge {} -> {}",
                graph.vertex_label(u),
                graph.vertex_label(v)
            );
            true
        }
        None => false,
    }
}

/// Topological ordering of a directed acyclic graph.
///
/// Every vertex appears exactly once and for every edge `u -> v`, `u` comes
/// before `v`. Fails with [`AlgoError::CycleDetected`] instead of returning a
/// partial order.
pub fn topological_sort<'g, G: GraphView>(graph: &'g G) -> AlgoResult<Vec<&'g str>> {
    if !graph.is_directed() {
        return Err(AlgoError::RequiresDirected("topological sort"));
    }

    match directed_postorder(graph) {
        Ok(postorder) => {
            debug!("Topological sort of {} vertices", postorder.len());
            Ok(postorder
                .into_iter()
                .rev()
                .map(|idx| graph.vertex_label(idx))
                .collect())
        }
        Err((u, v)) => {
            warn!(
                "Topological sort rejected: edge {} -> {} closes a cycle",
                graph.vertex_label(u),
                graph.vertex_label(v)
            );
            Err(AlgoError::CycleDetected)
        }
    }
}
