mod classifier;


use crate::model::{ReachTask, SpdiGraph};
use crate::solver::{AmfSearch, SolverConfig};

/// Runs the search over `graph` and `task` with a fixed worker budget.
pub fn explore_with_budget(graph: &SpdiGraph, task: &ReachTask, budget: usize) -> bool {
    let mut config = SolverConfig::from(graph);
    config.worker_budget = budget;
    AmfSearch::explore(&config, task).unwrap()
}
