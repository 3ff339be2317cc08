//! Pathfinding algorithms
//!
//! Unweighted shortest path and distance queries (BFS), Dijkstra for
//! non-negative weights and Floyd-Warshall for all pairs.

use super::common::{
    reconstruct_path, resolve, AlgoError, AlgoResult, EdgeWeight, GraphView, VertexIdx,
};
use ndarray::Array2;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};
use tracing::{debug, warn};

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathResult<'g> {
    pub source: &'g str,
    pub target: &'g str,
    pub path: Vec<&'g str>,
    pub cost: f64,
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// Returns the vertex path with the fewest edges, both endpoints included, or
/// `None` when `target` is unreachable. Among equal-length paths the one found
/// first in frontier order wins.
pub fn shortest_path<'g, G: GraphView>(
    graph: &'g G,
    start: &str,
    target: &str,
) -> AlgoResult<Option<Vec<&'g str>>> {
    let start_idx = resolve(graph, start)?;
    let target_idx = resolve(graph, target)?;

    let n = graph.vertex_count();
    let mut queue = VecDeque::new();
    let mut visited = vec![false; n];
    let mut parent: Vec<Option<VertexIdx>> = vec![None; n];

    queue.push_back(start_idx);
    visited[start_idx] = true;

    while let Some(current_idx) = queue.pop_front() {
        if current_idx == target_idx {
            let path = reconstruct_path(graph, &parent, target_idx);
            debug!("Shortest path {} -> {} has {} edges", start, target, path.len() - 1);
            return Ok(Some(path));
        }

        for (next_idx, _) in graph.neighbors(current_idx) {
            if !visited[next_idx] {
                visited[next_idx] = true;
                parent[next_idx] = Some(current_idx);
                queue.push_back(next_idx);
            }
        }
    }

    debug!("No path {} -> {}", start, target);
    Ok(None)
}

/// Vertices whose BFS distance from `start` is exactly `distance`.
///
/// Labels come back in BFS discovery order.
pub fn vertices_n_away<'g, G: GraphView>(
    graph: &'g G,
    start: &str,
    distance: usize,
) -> AlgoResult<Vec<&'g str>> {
    let start_idx = resolve(graph, start)?;

    let mut queue = VecDeque::new();
    let mut visited = vec![false; graph.vertex_count()];
    let mut found = Vec::new();

    queue.push_back((start_idx, 0usize));
    visited[start_idx] = true;

    while let Some((current_idx, depth)) = queue.pop_front() {
        if depth == distance {
            found.push(graph.vertex_label(current_idx));
            // Nothing further out can be at the requested distance
            continue;
        }

        for (next_idx, _) in graph.neighbors(current_idx) {
            if !visited[next_idx] {
                visited[next_idx] = true;
                queue.push_back((next_idx, depth + 1));
            }
        }
    }

    debug!("{} vertices at distance {} from {}", found.len(), distance, start);
    Ok(found)
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node_idx: VertexIdx,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare costs reversed for min-heap, lower index first on ties
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Fail with [`AlgoError::NegativeWeight`] on the first negative edge
fn check_non_negative<G: GraphView>(graph: &G) -> AlgoResult<()> {
    for u in 0..graph.vertex_count() {
        for (v, weight) in graph.neighbors(u) {
            if weight.value() < 0.0 {
                let err = AlgoError::NegativeWeight {
                    from: graph.vertex_label(u).to_string(),
                    to: graph.vertex_label(v).to_string(),
                    weight: weight.value(),
                };
                warn!("Rejecting graph for Dijkstra: {}", err);
                return Err(err);
            }
        }
    }
    Ok(())
}

/// Dijkstra's Algorithm (Weighted Shortest Path)
///
/// Every edge weight must be non-negative; this is checked up front. Stops as
/// soon as `target` is settled. Returns `None` when `target` is unreachable.
pub fn dijkstra<'g, G: GraphView>(
    graph: &'g G,
    source: &str,
    target: &str,
) -> AlgoResult<Option<PathResult<'g>>> {
    let source_idx = resolve(graph, source)?;
    let target_idx = resolve(graph, target)?;
    check_non_negative(graph)?;

    let n = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<VertexIdx>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[source_idx] = 0.0;
    heap.push(State { cost: 0.0, node_idx: source_idx });

    while let Some(State { cost, node_idx }) = heap.pop() {
        // Stale entry: a cheaper route was recorded after this one was queued
        if cost > dist[node_idx] {
            continue;
        }

        if node_idx == target_idx {
            let path = reconstruct_path(graph, &parent, target_idx);
            debug!("Dijkstra {} -> {} cost {}", source, target, cost);
            return Ok(Some(PathResult {
                source: graph.vertex_label(source_idx),
                target: graph.vertex_label(target_idx),
                path,
                cost,
            }));
        }

        for (next_idx, weight) in graph.neighbors(node_idx) {
            let next_cost = cost + weight.value();

            if next_cost < dist[next_idx] {
                dist[next_idx] = next_cost;
                parent[next_idx] = Some(node_idx);
                heap.push(State { cost: next_cost, node_idx: next_idx });
            }
        }
    }

    debug!("Dijkstra found no path {} -> {}", source, target);
    Ok(None)
}

/// All-pairs shortest path distances
#[derive(Debug, Clone)]
pub struct DistanceMatrix<'g> {
    /// Row/column order of the matrix
    pub labels: Vec<&'g str>,
    index: HashMap<&'g str, usize>,
    /// `distances[[i, j]]` is the shortest distance from `labels[i]` to `labels[j]`;
    /// unreachable pairs hold `f64::INFINITY`
    pub distances: Array2<f64>,
}

impl<'g> DistanceMatrix<'g> {
    /// Shortest distance from `from` to `to`; `None` if either label is unknown
    pub fn distance(&self, from: &str, to: &str) -> Option<f64> {
        let i = *self.index.get(from)?;
        let j = *self.index.get(to)?;
        Some(self.distances[[i, j]])
    }

    /// Whether `to` can be reached from `from`
    pub fn is_reachable(&self, from: &str, to: &str) -> bool {
        self.distance(from, to).is_some_and(f64::is_finite)
    }

    /// Number of vertices covered by the matrix
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Floyd-Warshall (all-pairs shortest paths)
///
/// Matrix rows follow the view's vertex order. Negative edges are allowed, a
/// negative cycle is reported as [`AlgoError::NegativeCycle`].
pub fn floyd_warshall<'g, G: GraphView>(graph: &'g G) -> AlgoResult<DistanceMatrix<'g>> {
    let n = graph.vertex_count();
    let mut distances = Array2::from_elem((n, n), f64::INFINITY);

    for u in 0..n {
        distances[[u, u]] = 0.0;
        for (v, weight) in graph.neighbors(u) {
            let weight = weight.value();
            if weight < distances[[u, v]] {
                distances[[u, v]] = weight;
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let through_k = distances[[i, k]];
            if through_k == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                let candidate = through_k + distances[[k, j]];
                if candidate < distances[[i, j]] {
                    distances[[i, j]] = candidate;
                }
            }
        }
    }

    if (0..n).any(|i| distances[[i, i]] < 0.0) {
        warn!("Floyd-Warshall found a negative-weight cycle");
        return Err(AlgoError::NegativeCycle);
    }

    let labels: Vec<&'g str> = (0..n).map(|idx| graph.vertex_label(idx)).collect();
    let index = labels.iter().enumerate().map(|(i, &label)| (label, i)).collect();
    debug!("Floyd-Warshall computed {}x{} distance matrix", n, n);

    Ok(DistanceMatrix {
        labels,
        index,
        distances,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::AdjacencyList;

    #[test]
    fn test_shortest_path() {
        // 1->2->3->4, 1->5->4
        let view = AdjacencyList::from_edges(
            true,
            &["1", "2", "3", "4", "5"],
            &[("1", "2"), ("2", "3"), ("3", "4"), ("1", "5"), ("5", "4")],
        );

        let path = shortest_path(&view, "1", "4").unwrap();
        assert_eq!(path, Some(vec!["1", "5", "4"]));
        assert_eq!(shortest_path(&view, "4", "1").unwrap(), None);
        assert_eq!(shortest_path(&view, "3", "3").unwrap(), Some(vec!["3"]));
    }

    #[test]
    fn test_shortest_path_tie_break() {
        // Both A-B-D and A-C-D have two edges; B is listed first
        let view = AdjacencyList::from_edges(
            false,
            &["A", "B", "C", "D"],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
        );
        assert_eq!(
            shortest_path(&view, "A", "D").unwrap(),
            Some(vec!["A", "B", "D"])
        );
    }

    #[test]
    fn test_vertices_n_away() {
        let view = AdjacencyList::from_edges(
            false,
            &["A", "B", "C", "D", "E", "F"],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "E"), ("D", "F"), ("B", "C")],
        );

        assert_eq!(vertices_n_away(&view, "A", 0).unwrap(), vec!["A"]);
        assert_eq!(vertices_n_away(&view, "A", 1).unwrap(), vec!["B", "C"]);
        assert_eq!(vertices_n_away(&view, "A", 2).unwrap(), vec!["D", "E"]);
        assert_eq!(vertices_n_away(&view, "A", 3).unwrap(), vec!["F"]);
        assert!(vertices_n_away(&view, "A", 4).unwrap().is_empty());
    }

    #[test]
    fn test_dijkstra() {
        // 1->2 (10.0), 2->3 (5.0), 1->3 (50.0)
        let view = AdjacencyList::from_weighted_edges(
            true,
            &["1", "2", "3"],
            &[("1", "2", 10.0), ("1", "3", 50.0), ("2", "3", 5.0)],
        );

        let result = dijkstra(&view, "1", "3").unwrap().unwrap();
        assert_eq!(result.path, vec!["1", "2", "3"]);
        assert_eq!(result.cost, 15.0);

        assert_eq!(dijkstra(&view, "3", "1").unwrap(), None);
    }

    #[test]
    fn test_dijkstra_skips_stale_entries() {
        // S->A (1), S->B (4), A->B (1), B->T (1)
        let view = AdjacencyList::from_weighted_edges(
            true,
            &["S", "A", "B", "T"],
            &[("S", "A", 1.0), ("S", "B", 4.0), ("A", "B", 1.0), ("B", "T", 1.0)],
        );

        let result = dijkstra(&view, "S", "T").unwrap().unwrap();
        assert_eq!(result.path, vec!["S", "A", "B", "T"]);
        assert_eq!(result.cost, 3.0);
    }

    #[test]
    fn test_dijkstra_rejects_negative_weight() {
        let view = AdjacencyList::from_weighted_edges(
            true,
            &["1", "2", "3", "4"],
            &[("1", "2", 1.0), ("2", "3", -2.0), ("3", "4", 1.0)],
        );

        let err = dijkstra(&view, "1", "4").unwrap_err();
        assert_eq!(
            err,
            AlgoError::NegativeWeight {
                from: "2".to_string(),
                to: "3".to_string(),
                weight: -2.0
            }
        );
    }

    #[test]
    fn test_floyd_warshall() {
        let view = AdjacencyList::from_weighted_edges(
            true,
            &["A", "B", "C", "D"],
            &[("A", "B", 3.0), ("B", "C", -1.0), ("A", "C", 5.0), ("C", "A", 2.0)],
        );

        let matrix = floyd_warshall(&view).unwrap();
        assert_eq!(matrix.len(), 4);
        assert_eq!(matrix.distance("A", "C"), Some(2.0));
        assert_eq!(matrix.distance("B", "A"), Some(1.0));
        assert_eq!(matrix.distance("A", "A"), Some(0.0));
        assert_eq!(matrix.distance("A", "D"), Some(f64::INFINITY));
        assert!(!matrix.is_reachable("D", "A"));
        assert_eq!(matrix.distance("A", "Z"), None);
    }

    #[test]
    fn test_floyd_warshall_negative_cycle() {
        let view = AdjacencyList::from_weighted_edges(
            true,
            &["A", "B"],
            &[("A", "B", 1.0), ("B", "A", -3.0)],
        );
        assert_eq!(floyd_warshall(&view).unwrap_err(), AlgoError::NegativeCycle);
    }
}
