//!
//! utils
//!
use super::residue::ResidueGraph;
use super::FlowRateLike;
use petgraph::dot::Dot;
use petgraph::graph::EdgeIndex;

/// shorthand of `EdgeIndex::new`
pub fn ei(i: usize) -> EdgeIndex {
    EdgeIndex::new(i)
}

///
/// Graphviz dot representation of the residue graph, with flow/capacity and cost labels
///
pub fn draw<F: FlowRateLike>(graph: &ResidueGraph<F>) -> String {
    let labelled = graph
        .as_digraph()
        .map(|v, _| v.index(), |_, ew| ew.to_string());
    format!("{}", Dot::new(&labelled))
}
