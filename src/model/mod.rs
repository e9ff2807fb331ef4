//! The static input of a reachability analysis: the SPDI graph (edge adjacency
//! plus per-edge control data) and the reachability task posed over it (start
//! parts and accepting parts).
//!
//! Both structures are immutable once a search starts and are shared by
//! reference across all concurrent search branches. With the `serde` feature,
//! [`SpdiSystem`] bundles a graph and a task into a loadable JSON model file.

mod graph;
mod interval;
mod reach_task;
#[cfg(feature = "serde")]
mod serialize;

pub use graph::{ControlPoint, EdgeId, SpdiEdge, SpdiGraph};
pub use interval::Interval;
pub use reach_task::ReachTask;
#[cfg(feature = "serde")]
pub use serialize::SpdiSystem;
