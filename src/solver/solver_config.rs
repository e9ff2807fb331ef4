use crate::model::SpdiGraph;

/// A configuration struct for the reachability [`SignatureSearch`] solver.
///
/// [`SignatureSearch`]: crate::solver::SignatureSearch
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// The SPDI graph on which the reachability question is asked.
    pub graph: SpdiGraph,

    /// The number of additional worker threads the search may run at any one
    /// time, on top of the calling thread.
    ///
    /// With a budget of zero, the whole search runs sequentially on the caller.
    /// Default: one less than the available parallelism.
    pub worker_budget: usize,

    /// The number of direct cycle iterations after which the classification of
    /// a single cycle is abandoned with a cancellation error.
    ///
    /// Default: `usize::MAX` (i.e. unrestricted).
    pub max_cycle_iterations: usize,
}

impl From<SpdiGraph> for SolverConfig {
    fn from(graph: SpdiGraph) -> Self {
        SolverConfig::new(graph)
    }
}

impl From<&SpdiGraph> for SolverConfig {
    fn from(graph: &SpdiGraph) -> Self {
        SolverConfig::new(graph.clone())
    }
}

impl SolverConfig {
    /// Create a new [`SolverConfig`] with default values.
    pub fn new(graph: SpdiGraph) -> SolverConfig {
        let parallelism = std::thread::available_parallelism()
            .map(|it| it.get())
            .unwrap_or(4);
        SolverConfig {
            graph,
            worker_budget: parallelism.saturating_sub(1),
            max_cycle_iterations: usize::MAX,
        }
    }
}
