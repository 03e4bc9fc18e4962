//! Flow network definitions
//! - FlowEdge, FlowNetwork
//! - Flow
//! - validity checks of a flow on a ResidueGraph
use super::error::FlowError;
use super::residue::ResidueGraph;
use super::{Cost, FlowRateLike};
use petgraph::visit::EdgeRef;
use std::ops::Index;

/// Edge of the input network
/// It has
/// - endpoints from -> to
/// - capacity u
/// - cost per flow c
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FlowEdge<F: FlowRateLike> {
    pub from: usize,
    pub to: usize,
    /// capacity (upper limit of flow) of the edge u(e)
    pub capacity: F,
    /// cost per unit flow
    pub cost: Cost,
}

impl<F: FlowRateLike> FlowEdge<F> {
    pub fn new(from: usize, to: usize, capacity: F, cost: Cost) -> FlowEdge<F> {
        FlowEdge {
            from,
            to,
            capacity,
            cost,
        }
    }
}

impl<F: FlowRateLike> std::fmt::Display for FlowEdge<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.from, self.to, self.capacity, self.cost)
    }
}

///
/// Input of the problem: vertices `0..n_vertices` and an ordered edge list.
///
/// The source is vertex `0` and the sink is vertex `n_vertices - 1`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowNetwork<F: FlowRateLike> {
    pub n_vertices: usize,
    pub edges: Vec<FlowEdge<F>>,
}

impl<F: FlowRateLike> FlowNetwork<F> {
    pub fn new(n_vertices: usize, edges: Vec<FlowEdge<F>>) -> FlowNetwork<F> {
        FlowNetwork { n_vertices, edges }
    }
    pub fn source(&self) -> usize {
        0
    }
    pub fn sink(&self) -> usize {
        self.n_vertices.saturating_sub(1)
    }
    ///
    /// Build the residue graph. Edge `i` of the network becomes `EdgeIndex(2i)`.
    ///
    pub fn to_residue_graph(&self) -> Result<ResidueGraph<F>, FlowError> {
        if self.n_vertices == 0 {
            return Err(FlowError::InvalidInput(
                "network must have at least one vertex".to_string(),
            ));
        }
        let mut graph = ResidueGraph::new(self.n_vertices);
        for e in self.edges.iter() {
            graph.add_edge(e.from, e.to, e.capacity, e.cost)?;
        }
        Ok(graph)
    }
}

/// Flow definitions
///
/// Flow f is a mapping of F f(e) to each original edge e, in insertion order
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Flow<F: FlowRateLike>(Vec<F>);

impl<F: FlowRateLike> Flow<F> {
    pub fn from_vec(vec: Vec<F>) -> Flow<F> {
        Flow(vec)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn to_vec(&self) -> Vec<F> {
        self.0.clone()
    }
    pub fn iter(&self) -> impl Iterator<Item = &F> {
        self.0.iter()
    }
}

impl<F: FlowRateLike> Index<usize> for Flow<F> {
    type Output = F;
    fn index(&self, i: usize) -> &F {
        &self.0[i]
    }
}

///
/// Check if the flow on the graph is valid, i.e. it satisfies
/// - capacity constraint
/// - antisymmetry of paired edges
/// - flow constraint on every vertex except source and sink
///
pub fn is_valid_flow<F: FlowRateLike>(
    graph: &ResidueGraph<F>,
    source: usize,
    sink: usize,
) -> bool {
    is_in_capacity(graph)
        && is_antisymmetric(graph)
        && is_satisfying_flow_constraint(graph, source, sink)
}

///
/// For each original edge, the flow must satisfy `0 <= flow <= capacity`.
///
pub fn is_in_capacity<F: FlowRateLike>(graph: &ResidueGraph<F>) -> bool {
    graph
        .forward_edges()
        .all(|(_, _, ew)| F::zero() <= ew.flow && ew.flow <= ew.capacity)
}

///
/// For each edge e and its pair r, `e.flow + r.flow == 0`.
///
pub fn is_antisymmetric<F: FlowRateLike>(graph: &ResidueGraph<F>) -> bool {
    graph.as_digraph().edge_references().all(|er| {
        let ew = er.weight();
        let rw = &graph[ew.rev];
        rw.rev == er.id() && ew.flow.checked_add(rw.flow) == Some(F::zero())
    })
}

///
/// For each node except source and sink,
/// (the sum of out-going flows) should be equal to (the sum of in-coming flows).
///
pub fn is_satisfying_flow_constraint<F: FlowRateLike>(
    graph: &ResidueGraph<F>,
    source: usize,
    sink: usize,
) -> bool {
    // no sum of i64 flows overflows i128
    let mut excess: Vec<i128> = vec![0; graph.vertex_count()];
    for (v, w, ew) in graph.forward_edges() {
        let flow = i128::from(ew.flow.to_cost());
        excess[v.index()] -= flow;
        excess[w.index()] += flow;
    }
    excess
        .iter()
        .enumerate()
        .filter(|&(v, _)| v != source && v != sink)
        .all(|(_, &x)| x == 0)
}

///
/// Total cost of the flow, Σ flow * cost over original edges.
///
/// `None` if it does not fit in `Cost`.
///
pub fn total_cost<F: FlowRateLike>(graph: &ResidueGraph<F>) -> Option<Cost> {
    graph
        .forward_edges()
        .try_fold(0i128, |total, (_, _, ew)| {
            total.checked_add(i128::from(ew.flow.to_cost()) * i128::from(ew.cost))
        })
        .and_then(|total| Cost::try_from(total).ok())
}
