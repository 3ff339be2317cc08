//! Minimum Spanning Tree algorithms
//!
//! Implements Kruskal's algorithm (spanning forest, any graph) and Prim's
//! algorithm (connected undirected graphs).

use super::common::{resolve, AlgoError, AlgoResult, EdgeWeight, GraphView, VertexIdx};
use super::union_find::UnionFind;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MstResult<'g> {
    pub total_weight: f64,
    pub edges: Vec<(&'g str, &'g str, f64)>, // (source, target, weight)
}

/// Kruskal's Algorithm for Minimum Spanning Tree
///
/// Edges are considered in ascending weight order, ties broken by source then
/// target label. Each undirected edge is considered once; directed edges are
/// treated as undirected. Stops once `V - 1` edges are selected or the edges
/// run out, so a disconnected graph yields a minimum spanning forest.
pub fn kruskal_mst<'g, G: GraphView>(graph: &'g G) -> MstResult<'g> {
    let n = graph.vertex_count();
    let directed = graph.is_directed();

    let mut candidates: Vec<(VertexIdx, VertexIdx, f64)> = Vec::new();
    for u in 0..n {
        for (v, weight) in graph.neighbors(u) {
            if directed || u <= v {
                candidates.push((u, v, weight.value()));
            }
        }
    }

    candidates.sort_by(|a, b| {
        a.2.total_cmp(&b.2)
            .then_with(|| graph.vertex_label(a.0).cmp(graph.vertex_label(b.0)))
            .then_with(|| graph.vertex_label(a.1).cmp(graph.vertex_label(b.1)))
    });

    let wanted = n.saturating_sub(1);
    let mut uf = UnionFind::new(n);
    let mut edges = Vec::with_capacity(wanted);
    let mut total_weight = 0.0;

    for (u, v, weight) in candidates {
        if edges.len() == wanted {
            break;
        }
        if uf.union(u, v) {
            edges.push((graph.vertex_label(u), graph.vertex_label(v), weight));
            total_weight += weight;
        }
    }

    if edges.len() < wanted {
        debug!(
            "Kruskal produced a spanning forest: {} edges for {} vertices",
            edges.len(),
            n
        );
    } else {
        debug!("Kruskal MST total weight {}", total_weight);
    }

    MstResult {
        total_weight,
        edges,
    }
}

#[derive(Copy, Clone, PartialEq)]
struct EdgeState {
    weight: f64,
    target: VertexIdx,
}

impl Eq for EdgeState {}

impl Ord for EdgeState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.target.cmp(&self.target))
    }
}

impl PartialOrd for EdgeState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Prim's Algorithm for Minimum Spanning Tree, starting at the first vertex
pub fn prim_mst<'g, G: GraphView>(graph: &'g G) -> AlgoResult<MstResult<'g>> {
    require_undirected(graph)?;
    if graph.vertex_count() == 0 {
        return Ok(MstResult {
            total_weight: 0.0,
            edges: Vec::new(),
        });
    }
    prim_from_index(graph, 0)
}

/// Prim's Algorithm for Minimum Spanning Tree, starting at `start`
pub fn prim_mst_from<'g, G: GraphView>(graph: &'g G, start: &str) -> AlgoResult<MstResult<'g>> {
    require_undirected(graph)?;
    let start_idx = resolve(graph, start)?;
    prim_from_index(graph, start_idx)
}

fn require_undirected<G: GraphView>(graph: &G) -> AlgoResult<()> {
    if graph.is_directed() {
        return Err(AlgoError::RequiresUndirected("Prim's MST"));
    }
    Ok(())
}

/// Expects an undirected graph and fails unless it is connected. The best known connecting weight
/// of every vertex starts at infinity (the start vertex at 0) and the cheapest
/// vertex is pulled from a binary heap; stale heap entries are skipped.
fn prim_from_index<'g, G: GraphView>(graph: &'g G, start_idx: VertexIdx) -> AlgoResult<MstResult<'g>> {
    let n = graph.vertex_count();
    let mut best = vec![f64::INFINITY; n];
    let mut via: Vec<Option<VertexIdx>> = vec![None; n];
    let mut included = vec![false; n];
    let mut heap = BinaryHeap::new();
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight = 0.0;
    let mut reached = 0;

    best[start_idx] = 0.0;
    heap.push(EdgeState { weight: 0.0, target: start_idx });

    while let Some(EdgeState { weight, target }) = heap.pop() {
        if included[target] || weight > best[target] {
            continue;
        }

        included[target] = true;
        reached += 1;
        total_weight += weight;
        if let Some(source) = via[target] {
            edges.push((graph.vertex_label(source), graph.vertex_label(target), weight));
        }

        for (next, edge_weight) in graph.neighbors(target) {
            let edge_weight = edge_weight.value();
            if !included[next] && edge_weight < best[next] {
                best[next] = edge_weight;
                via[next] = Some(target);
                heap.push(EdgeState { weight: edge_weight, target: next });
            }
        }
    }

    if reached < n {
        warn!("Prim's MST reached {} of {} vertices", reached, n);
        return Err(AlgoError::Disconnected { reached, total: n });
    }

    debug!("Prim MST total weight {}", total_weight);
    Ok(MstResult {
        total_weight,
        edges,
    })
}
