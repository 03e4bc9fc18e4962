pub mod cut;
pub mod engine;
pub mod error;
pub mod flow;
pub mod flow_rate;
pub mod mocks;
pub mod residue;
pub mod shortest_path;
pub mod utils;

pub use cut::{cut_capacity, min_cut};
pub use engine::{Augmentation, FlowSummary, MinCostFlow, MinCostFlowConfig, PotentialInit};
pub use error::FlowError;
pub use flow::{Flow, FlowEdge, FlowNetwork};
pub use flow_rate::FlowRateLike;
pub use residue::{ResidueDirection, ResidueEdge, ResidueGraph};

use flow::total_cost;
use log::debug;

/// Cost per unit flow, potentials and distances
pub type Cost = i64;

///
/// Everything the solver reports about a network
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowReport<F: FlowRateLike> {
    pub max_flow: F,
    pub min_cost: Cost,
    /// source side of a minimum cut, sorted
    pub cut: Vec<usize>,
    /// flow of each network edge, in input order
    pub flow: Flow<F>,
}

//
// public functions
//

///
/// Find the minimum cost maximum flow from vertex `0` to vertex `n - 1` of the network,
/// and the minimum cut.
///
pub fn min_cost_flow<F: FlowRateLike>(
    network: &FlowNetwork<F>,
) -> Result<FlowReport<F>, FlowError> {
    min_cost_flow_with_config(network, MinCostFlowConfig::default())
}

///
/// `min_cost_flow` with explicit solver configuration
///
pub fn min_cost_flow_with_config<F: FlowRateLike>(
    network: &FlowNetwork<F>,
    config: MinCostFlowConfig,
) -> Result<FlowReport<F>, FlowError> {
    let mut graph = network.to_residue_graph()?;
    let (source, sink) = (network.source(), network.sink());
    debug!(
        "residue graph of {} vertices and {} edges, {} -> {}",
        graph.vertex_count(),
        graph.edge_count(),
        source,
        sink
    );

    let summary = MinCostFlow::with_config(&mut graph, config).run(source, sink)?;
    let cut = min_cut(&graph, source);
    let capacity = cut_capacity(&graph, &cut);
    debug!("cut of {} vertices with capacity {:?}", cut.len(), capacity);
    debug_assert!(source == sink || capacity == Some(summary.max_flow));
    debug_assert_eq!(total_cost(&graph), Some(summary.min_cost));

    Ok(FlowReport {
        max_flow: summary.max_flow,
        min_cost: summary.min_cost,
        cut,
        flow: graph.flow(),
    })
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::flow::is_valid_flow;
    use super::mocks::*;
    use super::*;
    use petgraph::algo::bellman_ford;
    use petgraph::graph::{DiGraph, NodeIndex};

    /// deterministic pseudo random numbers for generated networks
    struct Lcg(u64);

    impl Lcg {
        fn below(&mut self, bound: u64) -> u64 {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (self.0 >> 33) % bound
        }
    }

    ///
    /// Random network. With `acyclic`, edges only go from lower to higher vertex
    /// so negative costs cannot form a cycle.
    ///
    fn random_network(rng: &mut Lcg, acyclic: bool) -> FlowNetwork<i64> {
        let n = 2 + rng.below(7) as usize;
        let m = rng.below(3 * n as u64) as usize;
        let mut edges = Vec::new();
        for _ in 0..m {
            let mut v = rng.below(n as u64) as usize;
            let mut w = rng.below(n as u64) as usize;
            let cost = if acyclic {
                if v == w {
                    continue;
                }
                if v > w {
                    std::mem::swap(&mut v, &mut w);
                }
                rng.below(21) as i64 - 10
            } else {
                rng.below(11) as i64
            };
            let capacity = rng.below(8) as i64;
            edges.push(FlowEdge::new(v, w, capacity, cost));
        }
        FlowNetwork::new(n, edges)
    }

    ///
    /// Optimality certificate: no negative cycle among edges with residual capacity.
    ///
    fn has_no_negative_residual_cycle(graph: &ResidueGraph<i64>) -> bool {
        let mut g: DiGraph<(), f64> = graph.as_digraph().filter_map(
            |_, _| Some(()),
            |_, ew| {
                if ew.residual() > 0 {
                    Some(ew.cost as f64)
                } else {
                    None
                }
            },
        );
        let root = g.add_node(());
        for v in 0..graph.vertex_count() {
            g.add_edge(root, NodeIndex::new(v), 0.0);
        }
        bellman_ford(&g, root).is_ok()
    }

    fn check_properties(
        network: &FlowNetwork<i64>,
        config: MinCostFlowConfig,
    ) -> FlowReport<i64> {
        let mut graph = network.to_residue_graph().unwrap();
        let (source, sink) = (network.source(), network.sink());
        let summary = MinCostFlow::with_config(&mut graph, config)
            .run(source, sink)
            .unwrap();

        assert!(is_valid_flow(&graph, source, sink));
        assert_eq!(total_cost(&graph), Some(summary.min_cost));
        let out_flow: i64 = graph
            .edges(NodeIndex::new(source))
            .map(|er| er.weight().flow)
            .sum();
        assert_eq!(out_flow, summary.max_flow);
        assert!(has_no_negative_residual_cycle(&graph));

        let cut = min_cut(&graph, source);
        assert_eq!(cut, min_cut(&graph, source));
        assert!(cut.contains(&source));
        if source != sink {
            assert!(!cut.contains(&sink));
            assert_eq!(cut_capacity(&graph, &cut), Some(summary.max_flow));
        }

        let report = min_cost_flow_with_config(network, config).unwrap();
        assert_eq!(report.max_flow, summary.max_flow);
        assert_eq!(report.min_cost, summary.min_cost);
        assert_eq!(report.cut, cut);
        report
    }

    #[test]
    fn scenarios() {
        let a = min_cost_flow(&mock_flow_network_a()).unwrap();
        assert_eq!((a.max_flow, a.min_cost, a.cut), (0, 0, vec![0]));
        assert!(a.flow.is_empty());

        let b = min_cost_flow(&mock_flow_network_b()).unwrap();
        assert_eq!((b.max_flow, b.min_cost), (3, 10));
        assert_eq!(b.cut, vec![0, 1, 2]);
        assert_eq!(b.flow.to_vec(), vec![1, 2, 0, 1, 2]);

        let c = min_cost_flow(&mock_flow_network_c()).unwrap();
        assert_eq!((c.max_flow, c.min_cost, c.cut), (5, 10, vec![0]));
        assert_eq!(c.flow.to_vec(), vec![5]);
    }

    #[test]
    fn single_vertex_network() {
        let network: FlowNetwork<i32> = FlowNetwork::new(1, vec![FlowEdge::new(0, 0, 3, 1)]);
        let report = min_cost_flow(&network).unwrap();
        assert_eq!((report.max_flow, report.min_cost), (0, 0));
        assert_eq!(report.cut, vec![0]);
    }

    #[test]
    fn rejected_networks() {
        let empty: FlowNetwork<i32> = FlowNetwork::new(0, vec![]);
        assert!(matches!(
            min_cost_flow(&empty),
            Err(FlowError::InvalidInput(_))
        ));
        let negative = FlowNetwork::new(2, vec![FlowEdge::new(0, 1, -3i32, 1)]);
        assert!(matches!(
            min_cost_flow(&negative),
            Err(FlowError::NegativeCapacity { .. })
        ));
        assert!(matches!(
            min_cost_flow(&mock_negative_cycle_network()),
            Err(FlowError::NegativeCycle(0))
        ));
    }

    #[test]
    fn overflowing_networks() {
        let huge_capacity = FlowNetwork::new(
            2,
            vec![FlowEdge::new(0, 1, i64::MAX, 0), FlowEdge::new(0, 1, i64::MAX, 0)],
        );
        assert!(matches!(
            min_cost_flow(&huge_capacity),
            Err(FlowError::FlowOverflow { n_augmentations: 2 })
        ));

        let huge_cost = FlowNetwork::new(
            3,
            vec![
                FlowEdge::new(0, 1, 1i64, 5_000_000_000_000_000_000),
                FlowEdge::new(1, 2, 1, 5_000_000_000_000_000_000),
            ],
        );
        assert!(matches!(
            min_cost_flow(&huge_cost),
            Err(FlowError::DistanceOverflow { vertex: 2 })
        ));
    }

    #[test]
    fn random_networks_non_negative_cost() {
        let mut rng = Lcg(7);
        for _ in 0..200 {
            let network = random_network(&mut rng, false);
            check_properties(&network, MinCostFlowConfig::default());
        }
    }

    #[test]
    fn random_networks_negative_cost() {
        let mut rng = Lcg(42);
        for _ in 0..200 {
            let network = random_network(&mut rng, true);
            let zero = check_properties(
                &network,
                MinCostFlowConfig {
                    potential_init: PotentialInit::Zero,
                },
            );
            let bf = check_properties(
                &network,
                MinCostFlowConfig {
                    potential_init: PotentialInit::BellmanFord,
                },
            );
            assert_eq!(zero.max_flow, bf.max_flow);
            assert_eq!(zero.min_cost, bf.min_cost);
        }
    }
}
