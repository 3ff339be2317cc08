//! Graph traversals
//!
//! Breadth-first and depth-first walks exposed as lazy, one-shot iterators over
//! vertex labels, plus a stack-based path search.

use super::common::{reconstruct_path, resolve, AlgoResult, GraphView, VertexIdx};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Breadth-first walk from a start vertex.
///
/// Yields every reachable vertex exactly once in non-decreasing distance order.
/// A vertex is marked visited when it is enqueued, so it can never sit in the
/// frontier twice.
pub struct Bfs<'g, G: GraphView> {
    graph: &'g G,
    queue: VecDeque<VertexIdx>,
    visited: Vec<bool>,
}

impl<'g, G: GraphView> Iterator for Bfs<'g, G> {
    type Item = &'g str;

    fn next(&mut self) -> Option<&'g str> {
        let graph = self.graph;
        let current = self.queue.pop_front()?;
        trace!("BFS visiting {}", graph.vertex_label(current));

        for (next, _) in graph.neighbors(current) {
            if !self.visited[next] {
                self.visited[next] = true;
                self.queue.push_back(next);
            }
        }

        Some(graph.vertex_label(current))
    }
}

/// Start a breadth-first traversal at `start`
pub fn bfs<'g, G: GraphView>(graph: &'g G, start: &str) -> AlgoResult<Bfs<'g, G>> {
    let start_idx = resolve(graph, start)?;
    debug!("BFS traversal from {}", start);

    let mut visited = vec![false; graph.vertex_count()];
    visited[start_idx] = true;

    Ok(Bfs {
        graph,
        queue: VecDeque::from([start_idx]),
        visited,
    })
}

/// Depth-first walk from a start vertex.
///
/// Uses an explicit stack, so graph depth is bounded by heap memory rather than
/// the call stack. Neighbors are pushed in reverse so the visit order matches
/// the recursive formulation.
pub struct Dfs<'g, G: GraphView> {
    graph: &'g G,
    stack: Vec<VertexIdx>,
    visited: Vec<bool>,
}

impl<'g, G: GraphView> Iterator for Dfs<'g, G> {
    type Item = &'g str;

    fn next(&mut self) -> Option<&'g str> {
        let graph = self.graph;

        while let Some(current) = self.stack.pop() {
            if self.visited[current] {
                continue;
            }
            self.visited[current] = true;
            trace!("DFS visiting {}", graph.vertex_label(current));

            let pending: Vec<VertexIdx> = graph
                .neighbors(current)
                .map(|(next, _)| next)
                .filter(|&next| !self.visited[next])
                .collect();
            self.stack.extend(pending.into_iter().rev());

            return Some(graph.vertex_label(current));
        }

        None
    }
}

/// Start a depth-first traversal at `start`
pub fn dfs<'g, G: GraphView>(graph: &'g G, start: &str) -> AlgoResult<Dfs<'g, G>> {
    let start_idx = resolve(graph, start)?;
    debug!("DFS traversal from {}", start);

    Ok(Dfs {
        graph,
        stack: vec![start_idx],
        visited: vec![false; graph.vertex_count()],
    })
}

/// Depth-first path search.
///
/// Returns *a* path from `start` to `target` (not necessarily the shortest),
/// or `None` when `target` is unreachable.
pub fn dfs_path<'g, G: GraphView>(
    graph: &'g G,
    start: &str,
    target: &str,
) -> AlgoResult<Option<Vec<&'g str>>> {
    let start_idx = resolve(graph, start)?;
    let target_idx = resolve(graph, target)?;

    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut parent: Vec<Option<VertexIdx>> = vec![None; n];
    let mut stack = vec![(start_idx, None)];

    while let Some((current, from)) = stack.pop() {
        if visited[current] {
            continue;
        }
        visited[current] = true;
        parent[current] = from;

        if current == target_idx {
            let path = reconstruct_path(graph, &parent, target_idx);
            debug!("DFS path {} -> {} has {} vertices", start, target, path.len());
            return Ok(Some(path));
        }

        let pending: Vec<VertexIdx> = graph
            .neighbors(current)
            .map(|(next, _)| next)
            .filter(|&next| !visited[next])
            .collect();
        stack.extend(pending.into_iter().rev().map(|next| (next, Some(current))));
    }

    debug!("No DFS path {} -> {}", start, target);
    Ok(None)
}
