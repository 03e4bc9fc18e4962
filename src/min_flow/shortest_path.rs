//!
//! Shortest paths on the ResidueGraph
//!
//! - `shortest_path`: Dijkstra under reduced cost `c(v,w) + p(v) - p(w)`
//! - `bellman_ford_potential`: initial potential when negative costs are present
//!
use super::error::FlowError;
use super::residue::{ResidueEdge, ResidueGraph};
use super::{Cost, FlowRateLike};
use petgraph::algo::bellman_ford;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

///
/// Distances and parent trace of a single search.
///
/// Scratch state, rebuilt by each call of `shortest_path`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    /// distance from the source under reduced cost, `None` if unreached
    pub distance: Vec<Option<Cost>>,
    /// parent vertex and the edge used to reach each vertex
    pub parent: Vec<Option<(NodeIndex, EdgeIndex)>>,
}

impl ShortestPathTree {
    fn new(n_vertices: usize) -> Self {
        ShortestPathTree {
            distance: vec![None; n_vertices],
            parent: vec![None; n_vertices],
        }
    }

    pub fn is_reached(&self, v: usize) -> bool {
        self.distance[v].is_some()
    }

    ///
    /// Edges of the tree path from the search source to `target`, source side first.
    ///
    /// Empty if `target` is the source or unreached.
    ///
    pub fn path_to(&self, target: usize) -> Vec<EdgeIndex> {
        let mut path = Vec::new();
        let mut v = target;
        while let Some((parent, e)) = self.parent[v] {
            path.push(e);
            v = parent.index();
            if path.len() > self.parent.len() {
                // parent links are acyclic unless a negative cycle was present
                break;
            }
        }
        path.reverse();
        path
    }
}

/// Reduced cost of the residue edge `v -> w`, `None` on overflow
pub fn reduced_cost<F: FlowRateLike>(
    edge: &ResidueEdge<F>,
    potential: &[Cost],
    v: NodeIndex,
    w: NodeIndex,
) -> Option<Cost> {
    edge.cost
        .checked_add(potential[v.index()])?
        .checked_sub(potential[w.index()])
}

///
/// Dijkstra from `source` over edges with positive residual capacity,
/// weighted by reduced cost.
///
/// Returns `Ok(None)` if `sink` is not reachable, and `DistanceOverflow` if a
/// distance does not fit in `Cost`.
///
/// Stale queue entries (popped with a distance larger than the recorded one) are skipped.
///
pub fn shortest_path<F: FlowRateLike>(
    graph: &ResidueGraph<F>,
    potential: &[Cost],
    source: usize,
    sink: usize,
) -> Result<Option<ShortestPathTree>, FlowError> {
    let mut tree = ShortestPathTree::new(graph.vertex_count());
    let mut queue = BinaryHeap::new();

    tree.distance[source] = Some(0);
    queue.push(Reverse((0, NodeIndex::new(source))));

    while let Some(Reverse((d, v))) = queue.pop() {
        match tree.distance[v.index()] {
            Some(best) if d > best => continue,
            _ => {}
        }

        for er in graph.edges(v) {
            let ew = er.weight();
            if ew.residual() <= F::zero() {
                continue;
            }
            let w = er.target();
            let dw = reduced_cost(ew, potential, v, w)
                .and_then(|c| d.checked_add(c))
                .ok_or(FlowError::DistanceOverflow { vertex: w.index() })?;
            let is_shorter = match tree.distance[w.index()] {
                Some(best) => dw < best,
                None => true,
            };
            if is_shorter {
                tree.distance[w.index()] = Some(dw);
                tree.parent[w.index()] = Some((v, er.id()));
                queue.push(Reverse((dw, w)));
            }
        }
    }

    if tree.is_reached(sink) {
        Ok(Some(tree))
    } else {
        Ok(None)
    }
}

///
/// Potential from a Bellman-Ford pass over the edges with positive residual capacity.
///
/// `p(v)` is the shortest distance from `source` in raw costs, or 0 if `v` is unreachable.
/// All reduced costs between reachable vertices are non-negative afterwards.
///
pub fn bellman_ford_potential<F: FlowRateLike>(
    graph: &ResidueGraph<F>,
    source: usize,
) -> Result<Vec<Cost>, FlowError> {
    let weighted: DiGraph<(), f64> = graph.as_digraph().filter_map(
        |_, _| Some(()),
        |_, ew| {
            if ew.residual() > F::zero() {
                Some(ew.cost as f64)
            } else {
                None
            }
        },
    );
    let paths = bellman_ford(&weighted, NodeIndex::new(source))
        .map_err(|_| FlowError::NegativeCycle(source))?;

    Ok(paths
        .distances
        .iter()
        .map(|&d| if d.is_finite() { d as Cost } else { 0 })
        .collect())
}
