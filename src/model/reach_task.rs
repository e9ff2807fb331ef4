use crate::model::{EdgeId, Interval};
use std::collections::BTreeMap;

/// One reachability question over an [`SpdiGraph`](crate::model::SpdiGraph): from
/// which parts of which edges the exploration starts, and which parts of which
/// edges are accepting.
///
/// The task is immutable for the lifetime of a search and is shared by reference
/// across all concurrent search branches. All referenced edges must belong to the
/// graph the task is solved against; the search is allowed to panic otherwise.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ReachTask {
    /// Initial sub-interval per start edge.
    pub start_edge_parts: BTreeMap<EdgeId, Interval>,
    /// Accepting sub-interval per final edge.
    pub final_edge_parts: BTreeMap<EdgeId, Interval>,
}

impl ReachTask {
    pub fn new() -> ReachTask {
        ReachTask::default()
    }

    /// True iff `edge` has an accepting part that `interval` intersects.
    pub fn is_final(&self, edge: EdgeId, interval: &Interval) -> bool {
        match self.final_edge_parts.get(&edge) {
            Some(part) => part.intersects(interval),
            None => false,
        }
    }

    /// The start parts in ascending edge order.
    pub fn start_parts(&self) -> impl Iterator<Item = (EdgeId, Interval)> {
        self.start_edge_parts.iter().map(|(edge, part)| (*edge, *part))
    }
}
