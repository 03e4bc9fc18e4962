//!
//! Minimum cut extraction from a terminal residue graph
//!
use super::residue::{ResidueEdge, ResidueGraph};
use super::FlowRateLike;
use petgraph::graph::{EdgeReference, NodeIndex};
use petgraph::visit::{Bfs, EdgeFiltered};

///
/// Vertices reachable from `source` along edges with positive residual capacity, sorted.
///
/// Once no augmenting path is left this is the source side of a minimum cut.
///
pub fn min_cut<F: FlowRateLike>(graph: &ResidueGraph<F>, source: usize) -> Vec<usize> {
    let residual = EdgeFiltered::from_fn(
        graph.as_digraph(),
        |er: EdgeReference<'_, ResidueEdge<F>>| er.weight().residual() > F::zero(),
    );
    let mut bfs = Bfs::new(&residual, NodeIndex::new(source));
    let mut cut = Vec::new();
    while let Some(v) = bfs.next(&residual) {
        cut.push(v.index());
    }
    cut.sort_unstable();
    cut
}

///
/// Sum of capacities of original edges leaving `cut`, `None` if it overflows `F`.
///
pub fn cut_capacity<F: FlowRateLike>(graph: &ResidueGraph<F>, cut: &[usize]) -> Option<F> {
    let mut in_cut = vec![false; graph.vertex_count()];
    for &v in cut {
        in_cut[v] = true;
    }
    graph
        .forward_edges()
        .filter(|(v, w, _)| in_cut[v.index()] && !in_cut[w.index()])
        .try_fold(F::zero(), |total, (_, _, ew)| total.checked_add(ew.capacity))
}
