use std::marker::PhantomData;

use cancel_this::{Cancellable, is_cancelled};
use log::{debug, error, info, trace, warn};

use crate::dynamics::{AmfDynamics, EdgeDynamics};
use crate::model::{EdgeId, Interval, ReachTask};
use crate::simple_type_name;
use crate::solver::SolverConfig;
use crate::solver::admission::WorkerBudget;
use crate::solver::classifier::classify_cycle;
use crate::solver::path_state::PathState;
use crate::solver::verdict::Verdict;

/// The edge-signature reachability search, generic over the interval kernel
/// used to move along the graph.
///
/// See the [module documentation](crate::solver) for the overall structure of
/// the procedure.
pub struct SignatureSearch<D: EdgeDynamics>(PhantomData<D>);

/// [`SignatureSearch`] over the affine multivalued kernel shipped with this
/// crate.
pub type AmfSearch = SignatureSearch<AmfDynamics>;

impl<D: EdgeDynamics> SignatureSearch<D> {
    /// Decide whether any start part of `task` can reach its final region on
    /// the graph of `config`.
    ///
    /// Returns an error when the search is canceled externally or a cycle
    /// classification exceeds [`SolverConfig::max_cycle_iterations`]. A
    /// positive verdict always wins over cancellation: once some branch has
    /// reached the final region, the result is `Ok(true)` regardless of how
    /// the remaining branches ended.
    pub fn explore(config: &SolverConfig, task: &ReachTask) -> Cancellable<bool> {
        SearchContext::<D>::new(config, task).run()
    }
}

/// The state shared by all branches of one running search.
struct SearchContext<'a, D> {
    config: &'a SolverConfig,
    task: &'a ReachTask,
    budget: WorkerBudget,
    verdict: Verdict,
    _dynamics: PhantomData<fn() -> D>,
}

impl<'a, D: EdgeDynamics> SearchContext<'a, D> {
    fn new(config: &'a SolverConfig, task: &'a ReachTask) -> SearchContext<'a, D> {
        SearchContext {
            config,
            task,
            budget: WorkerBudget::new(config.worker_budget),
            verdict: Verdict::new(),
            _dynamics: PhantomData,
        }
    }

    fn run(&self) -> Cancellable<bool> {
        info!(
            "Exploring {} start parts against {} final parts using SignatureSearch<{}> (worker budget: {}).",
            self.task.start_edge_parts.len(),
            self.task.final_edge_parts.len(),
            simple_type_name::<D>(),
            self.config.worker_budget,
        );

        let mut roots = Vec::new();
        for (edge, interval) in self.task.start_parts() {
            if interval.is_valid() {
                roots.push((edge, interval));
            } else {
                warn!(
                    "Skipping invalid start part {} on edge {}.",
                    interval,
                    self.config.graph.name(edge)
                );
            }
        }

        let outcome = self.fan_out(roots, &PathState::new());
        if self.verdict.is_reached() {
            info!("The final region is reachable.");
            Ok(true)
        } else {
            outcome?;
            info!("Search exhausted. The final region is not reachable.");
            Ok(false)
        }
    }

    /// Process one `(edge, interval)` pair on the branch described by `path`.
    fn step(&self, edge: EdgeId, interval: Interval, mut path: PathState) -> Cancellable<()> {
        is_cancelled!()?;
        if self.verdict.is_reached() {
            return Ok(());
        }
        trace!(
            "[depth:{}] Visiting edge {} at {}.",
            path.depth,
            self.config.graph.name(edge),
            interval
        );

        if self.task.is_final(edge, &interval) {
            self.verdict.confirm();
            debug!(
                "Reached the final region on edge {} through {}.",
                self.config.graph.name(edge),
                path.signature_with(edge)
            );
            return Ok(());
        }

        if !path.is_open(edge) {
            path.open(edge);
            let branches = self.advance(edge, interval);
            path.depth += 1;
            return self.fan_out(branches, &path);
        }

        // The edge is open on this path, so the revisit closes a cycle.
        let Some(cycle) = path.close_cycle(edge) else {
            error!(
                "Open edge {} is missing from the residual path.",
                self.config.graph.name(edge)
            );
            debug_assert!(false, "open edge missing from the residual path");
            return Ok(());
        };
        if !path.record_cycle(&cycle) {
            trace!(
                "[depth:{}] Cycle {} was already classified on this branch.",
                path.depth, cycle
            );
            return Ok(());
        }

        debug!("[depth:{}] Closed cycle {} at {}.", path.depth, cycle, interval);
        let outcome = classify_cycle::<D>(self.config, self.task, &cycle, interval)?;
        if outcome.accepted {
            self.verdict.confirm();
            debug!("Cycle {} reached the final region.", cycle);
            return Ok(());
        }

        path.depth += 1;
        for candidate in outcome.candidates {
            if !candidate.is_valid() {
                continue;
            }
            let branches = self.advance(edge, candidate);
            self.fan_out(branches, &path)?;
        }
        Ok(())
    }

    /// The one-step images of `interval` on the successors of `edge`, dropping
    /// successors whose image leaves the domain.
    fn advance(&self, edge: EdgeId, interval: Interval) -> Vec<(EdgeId, Interval)> {
        let mut branches = Vec::new();
        for &successor in self.config.graph.successors(edge) {
            let image = D::successor_interval(&self.config.graph, interval, edge, successor);
            if image.is_valid() {
                branches.push((successor, image));
            } else {
                trace!(
                    "Transition {} -> {} leaves the domain.",
                    self.config.graph.name(edge),
                    self.config.graph.name(successor)
                );
            }
        }
        branches
    }

    /// Explore `branches` as continuations of `path`, spawning a worker for
    /// every branch the budget admits and running the rest (always including
    /// the last) inline on the current thread.
    ///
    /// All spawned workers are joined before this returns. The first error
    /// among the branches is reported; a child panic is resumed on the caller.
    fn fan_out(&self, branches: Vec<(EdgeId, Interval)>, path: &PathState) -> Cancellable<()> {
        if branches.is_empty() {
            return Ok(());
        }
        let last = branches.len() - 1;
        std::thread::scope(|scope| {
            let mut handles = Vec::new();
            let mut result: Cancellable<()> = Ok(());
            for (index, (edge, interval)) in branches.into_iter().enumerate() {
                if index < last && self.budget.try_acquire() {
                    let branch_path = path.clone();
                    handles.push(scope.spawn(move || self.step(edge, interval, branch_path)));
                } else {
                    let outcome = self.step(edge, interval, path.clone());
                    if result.is_ok() {
                        result = outcome;
                    }
                }
            }
            for handle in handles {
                let outcome = match handle.join() {
                    Ok(outcome) => outcome,
                    Err(payload) => std::panic::resume_unwind(payload),
                };
                self.budget.release();
                if result.is_ok() {
                    result = outcome;
                }
            }
            result
        })
    }
}
