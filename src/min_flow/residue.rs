//! Residue graph related definitions
//! - ResidueEdge
//! - ResidueGraph
//! - ResidueDirection
//!
use super::error::FlowError;
use super::flow::Flow;
use super::{Cost, FlowRateLike};
use petgraph::graph::{DiGraph, EdgeIndex, EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;
use std::ops::{Index, IndexMut};

// basic definitions

/// Edge attributes used in ResidueGraph
#[derive(Debug, Copy, Clone)]
pub struct ResidueEdge<F: FlowRateLike> {
    /// Upper limit of the flow. Zero for `Down` edges.
    pub capacity: F,
    /// Cost per unit flow
    pub cost: Cost,
    /// Current flow. Always the negation of the paired edge's flow.
    pub flow: F,
    /// Index of the paired edge in the arena
    pub rev: EdgeIndex,
    /// Up for the original edge, Down for its paired reverse edge
    pub direction: ResidueDirection,
}

impl<F: FlowRateLike> ResidueEdge<F> {
    pub fn new(capacity: F, cost: Cost, rev: EdgeIndex, direction: ResidueDirection) -> Self {
        ResidueEdge {
            capacity,
            cost,
            flow: F::zero(),
            rev,
            direction,
        }
    }
    /// The amount of flow that can still be sent along this edge
    pub fn residual(&self) -> F {
        self.capacity - self.flow
    }
    pub fn is_original(&self) -> bool {
        self.direction == ResidueDirection::Up
    }
}

impl<F: FlowRateLike> std::fmt::Display for ResidueEdge<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}/{} c{}",
            self.direction, self.flow, self.capacity, self.cost
        )
    }
}

/// Residue direction enum
/// residue edge has two types
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResidueDirection {
    /// Up edge: the original edge, it can increase(+1) flow
    Up,
    /// Down edge: it can cancel(-1) flow of the original edge
    Down,
}

impl std::fmt::Display for ResidueDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ResidueDirection::Up => write!(f, "+"),
            ResidueDirection::Down => write!(f, "-"),
        }
    }
}

///
/// Directed multigraph of paired forward/reverse edges.
///
/// The underlying `DiGraph` is used as an append-only edge arena, so `EdgeIndex`
/// values never move. The k-th added edge lives at index `2k` and its reverse
/// at `2k+1`.
///
#[derive(Debug, Clone)]
pub struct ResidueGraph<F: FlowRateLike> {
    graph: DiGraph<(), ResidueEdge<F>>,
}

impl<F: FlowRateLike> ResidueGraph<F> {
    /// Create a graph of `n_vertices` isolated vertices
    pub fn new(n_vertices: usize) -> Self {
        let mut graph = DiGraph::with_capacity(n_vertices, 0);
        for _ in 0..n_vertices {
            graph.add_node(());
        }
        ResidueGraph { graph }
    }

    ///
    /// Append the edge `from -> to` and its reverse `to -> from` (capacity 0, cost `-cost`).
    ///
    /// Returns the index of the forward edge.
    ///
    pub fn add_edge(
        &mut self,
        from: usize,
        to: usize,
        capacity: F,
        cost: Cost,
    ) -> Result<EdgeIndex, FlowError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if capacity < F::zero() {
            return Err(FlowError::NegativeCapacity {
                from,
                to,
                capacity: capacity.to_cost(),
            });
        }

        let e = EdgeIndex::new(self.graph.edge_count());
        let r = EdgeIndex::new(e.index() + 1);
        let (v, w) = (NodeIndex::new(from), NodeIndex::new(to));
        self.graph
            .add_edge(v, w, ResidueEdge::new(capacity, cost, r, ResidueDirection::Up));
        self.graph.add_edge(
            w,
            v,
            ResidueEdge::new(F::zero(), -cost, e, ResidueDirection::Down),
        );
        Ok(e)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of logical (original) edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count() / 2
    }

    pub fn check_vertex(&self, vertex: usize) -> Result<(), FlowError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(FlowError::VertexOutOfRange {
                vertex,
                n_vertices: self.vertex_count(),
            })
        }
    }

    /// Outgoing residual edges (both directions) of vertex `v`
    pub fn edges(&self, v: NodeIndex) -> impl Iterator<Item = EdgeReference<'_, ResidueEdge<F>>> {
        self.graph.edges(v)
    }

    /// Original edges in insertion order, with their endpoints
    pub fn forward_edges(
        &self,
    ) -> impl Iterator<Item = (NodeIndex, NodeIndex, &ResidueEdge<F>)> + '_ {
        self.graph
            .edge_references()
            .filter(|e| e.weight().is_original())
            .map(|e| (e.source(), e.target(), e.weight()))
    }

    pub fn has_negative_cost(&self) -> bool {
        self.forward_edges().any(|(_, _, ew)| ew.cost < 0)
    }

    ///
    /// Send `amount` along `e`, taking it back from the paired edge.
    ///
    pub fn push_flow(&mut self, e: EdgeIndex, amount: F) {
        let rev = self.graph[e].rev;
        self.graph[e].flow += amount;
        self.graph[rev].flow -= amount;
    }

    /// Current flow of every original edge, in insertion order
    pub fn flow(&self) -> Flow<F> {
        Flow::from_vec(self.forward_edges().map(|(_, _, ew)| ew.flow).collect())
    }

    pub fn as_digraph(&self) -> &DiGraph<(), ResidueEdge<F>> {
        &self.graph
    }
}

impl<F: FlowRateLike> Index<EdgeIndex> for ResidueGraph<F> {
    type Output = ResidueEdge<F>;
    fn index(&self, e: EdgeIndex) -> &ResidueEdge<F> {
        &self.graph[e]
    }
}

impl<F: FlowRateLike> IndexMut<EdgeIndex> for ResidueGraph<F> {
    fn index_mut(&mut self, e: EdgeIndex) -> &mut ResidueEdge<F> {
        &mut self.graph[e]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::min_flow::utils::ei;

    #[test]
    fn residue_direction_basic() {
        assert_eq!(ResidueDirection::Up.to_string(), "+");
        assert_eq!(ResidueDirection::Down.to_string(), "-");
    }

    #[test]
    fn add_edge_creates_pair() {
        let mut g: ResidueGraph<i32> = ResidueGraph::new(3);
        let e0 = g.add_edge(0, 1, 4, 7).unwrap();
        let e1 = g.add_edge(1, 2, 2, -3).unwrap();
        assert_eq!(e0, ei(0));
        assert_eq!(e1, ei(2));
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);

        let fwd = g[e0];
        assert_eq!(fwd.capacity, 4);
        assert_eq!(fwd.cost, 7);
        assert_eq!(fwd.flow, 0);
        assert_eq!(fwd.rev, ei(1));
        assert_eq!(fwd.direction, ResidueDirection::Up);

        let rev = g[fwd.rev];
        assert_eq!(rev.capacity, 0);
        assert_eq!(rev.cost, -7);
        assert_eq!(rev.rev, e0);
        assert_eq!(rev.direction, ResidueDirection::Down);
        assert_eq!(
            g.as_digraph().edge_endpoints(fwd.rev),
            Some((NodeIndex::new(1), NodeIndex::new(0)))
        );

        assert_eq!(g[e1].cost, -3);
        assert_eq!(g[g[e1].rev].cost, 3);
        // reverse edges do not count
        assert!(g.has_negative_cost());
        g[e1].cost = 3;
        assert!(!g.has_negative_cost());
    }

    #[test]
    fn add_edge_rejects_bad_input() {
        let mut g: ResidueGraph<i64> = ResidueGraph::new(2);
        assert!(matches!(
            g.add_edge(0, 2, 1, 1),
            Err(FlowError::VertexOutOfRange {
                vertex: 2,
                n_vertices: 2
            })
        ));
        assert!(matches!(
            g.add_edge(1, 0, -1, 1),
            Err(FlowError::NegativeCapacity { capacity: -1, .. })
        ));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn push_flow_keeps_antisymmetry() {
        let mut g: ResidueGraph<i32> = ResidueGraph::new(2);
        let e = g.add_edge(0, 1, 5, 2).unwrap();
        g.push_flow(e, 3);
        assert_eq!(g[e].flow, 3);
        assert_eq!(g[e].residual(), 2);
        let r = g[e].rev;
        assert_eq!(g[r].flow, -3);
        assert_eq!(g[r].residual(), 3);

        // cancel part of it through the reverse edge
        g.push_flow(r, 1);
        assert_eq!(g[e].flow, 2);
        assert_eq!(g[r].flow, -2);
    }

    #[test]
    fn parallel_edges_are_independent() {
        let mut g: ResidueGraph<i32> = ResidueGraph::new(2);
        let a = g.add_edge(0, 1, 1, 1).unwrap();
        let b = g.add_edge(0, 1, 1, 1).unwrap();
        g.push_flow(b, 1);
        assert_eq!(g.flow().to_vec(), vec![0, 1]);
        assert_eq!(g[a].flow, 0);
        assert_eq!(g.edges(NodeIndex::new(0)).count(), 2);
        assert_eq!(g.edges(NodeIndex::new(1)).count(), 2);
    }

    #[test]
    fn self_loop_is_structurally_legal() {
        let mut g: ResidueGraph<i32> = ResidueGraph::new(1);
        let e = g.add_edge(0, 0, 3, 1).unwrap();
        assert_eq!(
            g.as_digraph().edge_endpoints(e),
            Some((NodeIndex::new(0), NodeIndex::new(0)))
        );
        assert_eq!(g.edges(NodeIndex::new(0)).count(), 2);
    }
}
