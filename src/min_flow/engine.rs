//!
//! Successive shortest augmenting paths with vertex potentials
//!
//! Each iteration runs Dijkstra under reduced cost, raises the potential of
//! every reached vertex by its distance, and pushes the bottleneck amount
//! along the path to the sink.
//!
use super::error::FlowError;
use super::flow::is_valid_flow;
use super::residue::ResidueGraph;
use super::shortest_path::{bellman_ford_potential, shortest_path};
use super::utils::draw;
use super::{Cost, FlowRateLike};
use log::{debug, info, log_enabled, trace, warn, Level};
use petgraph::graph::EdgeIndex;

/// How the potential is initialised before the first shortest path search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PotentialInit {
    /// BellmanFord if some edge has negative cost, Zero otherwise
    #[default]
    Auto,
    /// All zero. No negative cost cycle may be reachable from the source.
    Zero,
    /// One Bellman-Ford pass from the source
    BellmanFord,
}

impl std::fmt::Display for PotentialInit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PotentialInit::Auto => write!(f, "auto"),
            PotentialInit::Zero => write!(f, "zero"),
            PotentialInit::BellmanFord => write!(f, "bellman-ford"),
        }
    }
}

impl std::str::FromStr for PotentialInit {
    type Err = FlowError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(PotentialInit::Auto),
            "zero" => Ok(PotentialInit::Zero),
            "bellman-ford" => Ok(PotentialInit::BellmanFord),
            _ => Err(FlowError::InvalidInput(format!(
                "unknown potential init `{}` (expected auto, zero or bellman-ford)",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinCostFlowConfig {
    pub potential_init: PotentialInit,
}

/// Totals accumulated by `MinCostFlow::run`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowSummary<F: FlowRateLike> {
    pub max_flow: F,
    pub min_cost: Cost,
    /// number of augmenting paths used
    pub n_augmentations: usize,
}

impl<F: FlowRateLike> FlowSummary<F> {
    pub fn zero() -> Self {
        FlowSummary {
            max_flow: F::zero(),
            min_cost: 0,
            n_augmentations: 0,
        }
    }
}

/// A single augmentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Augmentation<F: FlowRateLike> {
    /// bottleneck amount pushed along the path
    pub amount: F,
    /// cost of one unit along the path, in original costs
    pub unit_cost: Cost,
    /// residue edges from source to sink
    pub path: Vec<EdgeIndex>,
}

///
/// Min-cost max-flow solver.
///
/// Holds the only mutable borrow of the graph while it is alive.
///
pub struct MinCostFlow<'a, F: FlowRateLike> {
    graph: &'a mut ResidueGraph<F>,
    potential: Vec<Cost>,
    config: MinCostFlowConfig,
}

impl<'a, F: FlowRateLike> MinCostFlow<'a, F> {
    pub fn new(graph: &'a mut ResidueGraph<F>) -> Self {
        MinCostFlow::with_config(graph, MinCostFlowConfig::default())
    }

    pub fn with_config(graph: &'a mut ResidueGraph<F>, config: MinCostFlowConfig) -> Self {
        let potential = vec![0; graph.vertex_count()];
        MinCostFlow {
            graph,
            potential,
            config,
        }
    }

    pub fn potentials(&self) -> &[Cost] {
        &self.potential
    }

    pub fn graph(&self) -> &ResidueGraph<F> {
        &*self.graph
    }

    ///
    /// Reset the potential according to `config.potential_init`.
    ///
    pub fn init_potential(&mut self, source: usize) -> Result<(), FlowError> {
        let has_negative_cost = self.graph.has_negative_cost();
        let use_bellman_ford = match self.config.potential_init {
            PotentialInit::Auto => has_negative_cost,
            PotentialInit::Zero => {
                if has_negative_cost {
                    warn!(
                        "negative edge costs with zero initial potential, \
                         a reachable negative cycle will not terminate"
                    );
                }
                false
            }
            PotentialInit::BellmanFord => true,
        };

        self.potential = if use_bellman_ford {
            debug!("initialising potential with Bellman-Ford from {}", source);
            bellman_ford_potential(self.graph, source)?
        } else {
            vec![0; self.graph.vertex_count()]
        };
        Ok(())
    }

    ///
    /// Find one augmenting path of minimum cost and push the bottleneck along it.
    ///
    /// Returns `Ok(None)` when the sink is no longer reachable (or `source == sink`).
    /// Graph and potential are left untouched unless a path is pushed.
    ///
    pub fn augment(
        &mut self,
        source: usize,
        sink: usize,
    ) -> Result<Option<Augmentation<F>>, FlowError> {
        self.graph.check_vertex(source)?;
        self.graph.check_vertex(sink)?;
        if source == sink {
            return Ok(None);
        }
        let tree = match shortest_path(self.graph, &self.potential, source, sink)? {
            Some(tree) => tree,
            None => return Ok(None),
        };

        // unreached vertices keep their potential
        let potential = self
            .potential
            .iter()
            .zip(tree.distance.iter())
            .enumerate()
            .map(|(v, (&p, d))| match d {
                Some(d) => p
                    .checked_add(*d)
                    .ok_or(FlowError::DistanceOverflow { vertex: v }),
                None => Ok(p),
            })
            .collect::<Result<Vec<Cost>, FlowError>>()?;
        self.potential = potential;

        let path = tree.path_to(sink);
        let amount = path
            .iter()
            .map(|&e| self.graph[e].residual())
            .fold(F::max_value(), std::cmp::min);
        for &e in path.iter() {
            self.graph.push_flow(e, amount);
        }

        Ok(Some(Augmentation {
            amount,
            unit_cost: self.potential[sink],
            path,
        }))
    }

    ///
    /// Push flow from `source` to `sink` until no augmenting path is left.
    ///
    pub fn run(&mut self, source: usize, sink: usize) -> Result<FlowSummary<F>, FlowError> {
        self.graph.check_vertex(source)?;
        self.graph.check_vertex(sink)?;

        let mut summary = FlowSummary::zero();
        if source == sink {
            info!("source and sink are both {}, nothing to push", source);
            return Ok(summary);
        }

        self.init_potential(source)?;

        while let Some(aug) = self.augment(source, sink)? {
            debug!(
                "augmentation #{}: {} units at cost {} along {} edges",
                summary.n_augmentations + 1,
                aug.amount,
                aug.unit_cost,
                aug.path.len()
            );
            if log_enabled!(Level::Trace) {
                trace!("{}", draw(self.graph));
            }
            debug_assert!(is_valid_flow(self.graph, source, sink));

            summary.max_flow = summary.max_flow.checked_add(aug.amount).ok_or(
                FlowError::FlowOverflow {
                    n_augmentations: summary.n_augmentations + 1,
                },
            )?;
            summary.min_cost = aug
                .amount
                .to_cost()
                .checked_mul(aug.unit_cost)
                .and_then(|c| summary.min_cost.checked_add(c))
                .ok_or(FlowError::CostOverflow {
                    flow: summary.max_flow.to_cost(),
                })?;
            summary.n_augmentations += 1;
        }

        info!(
            "max flow {} with min cost {} after {} augmentations",
            summary.max_flow, summary.min_cost, summary.n_augmentations
        );
        Ok(summary)
    }
}
