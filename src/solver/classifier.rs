use cancel_this::{Cancellable, Cancelled, is_cancelled};
use log::{debug, trace};

use crate::dynamics::{EdgeDynamics, Side};
use crate::model::{Interval, ReachTask};
use crate::solver::SolverConfig;
use crate::solver::path_state::Cycle;

/// The result of classifying one closed cycle.
pub(crate) struct CycleOutcome {
    /// True when some iteration of the cycle touched the final region.
    pub accepted: bool,
    /// The intervals from which the search continues past the cycle. Invalid
    /// entries mark continuations that died out and must be skipped.
    pub candidates: Vec<Interval>,
}

/// One full traversal of the cycle, watching for acceptance along the way.
struct LoopPass {
    accepted: bool,
    /// The image back on the entry edge, or invalid if the traversal died.
    image: Interval,
}

/// Push `seed` once around `cycle`, checking the final region on every hop.
fn traverse_cycle_once<D: EdgeDynamics>(
    config: &SolverConfig,
    task: &ReachTask,
    cycle: &Cycle,
    seed: Interval,
) -> LoopPass {
    let mut image = seed;
    for hop in cycle.edges().windows(2) {
        if !image.is_valid() {
            return LoopPass { accepted: false, image: Interval::INVALID };
        }
        if task.is_final(hop[0], &image) {
            return LoopPass { accepted: true, image };
        }
        image = D::successor_interval(&config.graph, image, hop[0], hop[1]);
    }
    if image.is_valid() {
        LoopPass { accepted: task.is_final(cycle.entry(), &image), image }
    } else {
        LoopPass { accepted: false, image: Interval::INVALID }
    }
}

/// Decide how the search continues once a cycle closes on `seed`.
///
/// First iterates the cycle directly until consecutive images of the entry edge
/// overlap (the convergence test), accepting immediately if any intermediate
/// image touches the final region and stopping with the last valid image if the
/// iteration leaves the domain. On convergence the remaining behavior is
/// accelerated: the boundary motion of the converged interval is fitted by one
/// affine map per side, extrapolated to its limit, and the cycle is swept one
/// final time from the resulting bounding interval.
pub(crate) fn classify_cycle<D: EdgeDynamics>(
    config: &SolverConfig,
    task: &ReachTask,
    cycle: &Cycle,
    seed: Interval,
) -> Cancellable<CycleOutcome> {
    let first = traverse_cycle_once::<D>(config, task, cycle, seed);
    if first.accepted {
        return Ok(CycleOutcome { accepted: true, candidates: vec![first.image] });
    }

    let mut previous = seed;
    let mut current = first.image;
    let mut iteration = 0usize;
    while !previous.intersects(&current) {
        is_cancelled!()?;
        if !current.is_valid() {
            debug!("Cycle {} left the domain after {} iterations.", cycle, iteration);
            return Ok(CycleOutcome { accepted: false, candidates: vec![previous] });
        }
        if iteration >= config.max_cycle_iterations {
            debug!("Cycle {} exceeded the iteration limit.", cycle);
            return Err(Cancelled::new("SolverConfig::max_cycle_iterations"));
        }
        iteration += 1;
        previous = current;
        let pass = traverse_cycle_once::<D>(config, task, cycle, previous);
        if pass.accepted {
            return Ok(CycleOutcome { accepted: true, candidates: vec![pass.image] });
        }
        current = pass.image;
        trace!("[cycle-iteration:{}] Cycle {} reached {}.", iteration, cycle, current);
    }

    accelerate::<D>(config, task, cycle, previous)
}

/// Fit the per-side boundary motion of `previous` under one pass of `cycle`
/// as an affine map `y = a*x + b`, and extrapolate both endpoints to their
/// limits.
fn boundary_fit<D: EdgeDynamics>(
    config: &SolverConfig,
    cycle: &Cycle,
    previous: Interval,
    side: Side,
) -> (f64, f64) {
    let y1 = D::iterated_boundary_point(&config.graph, previous.lo, cycle.edges(), side);
    let y2 = D::iterated_boundary_point(&config.graph, previous.hi, cycle.edges(), side);
    let a = (y2 - y1) / previous.width();
    let b = y1 - a * previous.lo;
    (
        D::extrapolate_fixed_point(a, b, previous.lo),
        D::extrapolate_fixed_point(a, b, previous.hi),
    )
}

fn accelerate<D: EdgeDynamics>(
    config: &SolverConfig,
    task: &ReachTask,
    cycle: &Cycle,
    previous: Interval,
) -> Cancellable<CycleOutcome> {
    if previous.width() == 0.0 {
        // A point interval admits no two-sample fit of its boundary motion.
        debug!("Cycle {} converged to the point {}; no continuation.", cycle, previous);
        return Ok(CycleOutcome { accepted: false, candidates: vec![Interval::INVALID] });
    }

    let (left_lo, left_hi) = boundary_fit::<D>(config, cycle, previous, Side::Left);
    let (right_lo, right_hi) = boundary_fit::<D>(config, cycle, previous, Side::Right);
    let left_limit = left_lo.min(left_hi).min(right_lo).min(right_hi);
    let right_limit = left_lo.max(left_hi).max(right_lo).max(right_hi);

    let bounding = Interval::new(
        previous.lo.min(left_limit).max(0.0),
        previous.hi.max(right_limit).min(1.0),
    );
    if !bounding.is_valid() {
        return Ok(CycleOutcome { accepted: false, candidates: vec![Interval::INVALID] });
    }
    debug!("Cycle {} accelerated to {}.", cycle, bounding);

    let sweep = traverse_cycle_once::<D>(config, task, cycle, bounding);
    Ok(CycleOutcome { accepted: sweep.accepted, candidates: vec![bounding] })
}
