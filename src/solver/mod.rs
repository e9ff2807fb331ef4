//! The reachability decision procedure for SPDI graphs.
//!
//! The solver answers one question: can any start part of a [`ReachTask`]
//! reach the final region by following the edge-to-edge interval dynamics of
//! an [`SpdiGraph`]? The procedure is a depth-first search over
//! `(edge, interval)` pairs organized by edge signatures:
//!
//!  - Visiting an edge that is not yet open on the current path opens it and
//!    continues into the images of the interval on its successors.
//!  - Revisiting an open edge closes a cycle. The cycle is classified by
//!    iterating its interval dynamics directly until consecutive images of
//!    the entry edge overlap, then accelerating the remaining behavior: the
//!    boundary motion is fitted by one affine map per side and extrapolated
//!    to its limit, replacing unboundedly many loop traversals by a single
//!    bounding interval. The search continues past the cycle from that
//!    interval.
//!  - A branch dies when its interval leaves the `[0, 1]` domain, when a
//!    converged cycle admits no continuation, or when the same cycle closes
//!    twice on one branch.
//!
//! ## Concurrency
//!
//! Branches at each fork are explored in parallel, admission-controlled by
//! [`SolverConfig::worker_budget`]: every fork spawns scoped workers for as
//! many sibling branches as the budget admits and explores the rest on the
//! current thread, so the search degrades gracefully to a sequential
//! depth-first traversal when the budget runs out (or is zero). A positive
//! verdict is published through a shared flag which short-circuits all
//! remaining branches.
//!
//! The search is cancellable through the `cancel-this` machinery; see
//! [`SignatureSearch::explore`] for the exact error semantics.
//!
//! ## Example
//!
//! ```rust
//! use spdi_reach::model::{ControlPoint, EdgeId, Interval, ReachTask, SpdiEdge, SpdiGraph};
//! use spdi_reach::solver::{AmfSearch, SolverConfig};
//!
//! // A single edge looping onto itself while drifting to the right.
//! let graph = SpdiGraph::new(vec![SpdiEdge {
//!     name: "e0".to_string(),
//!     successors: vec![EdgeId::from_index(0)],
//!     lower: ControlPoint(0.2, 1.2),
//!     upper: ControlPoint(0.2, 1.2),
//! }]);
//!
//! let mut task = ReachTask::new();
//! task.start_edge_parts.insert(EdgeId::from_index(0), Interval::new(0.05, 0.1));
//! task.final_edge_parts.insert(EdgeId::from_index(0), Interval::new(0.6, 0.8));
//!
//! let config = SolverConfig::from(graph);
//! assert_eq!(AmfSearch::explore(&config, &task), Ok(true));
//! ```
//!
//! [`ReachTask`]: crate::model::ReachTask
//! [`SpdiGraph`]: crate::model::SpdiGraph

mod admission;
mod classifier;
mod path_state;
mod signature_search;
mod solver_config;
mod verdict;

#[cfg(test)]
mod tests;

pub use signature_search::{AmfSearch, SignatureSearch};
pub use solver_config::SolverConfig;
