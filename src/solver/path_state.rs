use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use crate::model::EdgeId;

/// The per-branch exploration state of one search path.
///
/// Tracks the edges currently open on the path, the residual path itself (the
/// open edges in visit order), and the identifiers of cycles already processed
/// on this branch. Every fork of the search clones this state, so sibling
/// branches never observe each other's history.
#[derive(Clone)]
pub(crate) struct PathState {
    visited: HashSet<EdgeId>,
    residual_path: Vec<EdgeId>,
    visited_cycles: HashSet<CycleId>,
    /// The number of transitions taken from the start part, for log context.
    pub depth: usize,
}

impl PathState {
    pub fn new() -> PathState {
        PathState {
            visited: HashSet::new(),
            residual_path: Vec::new(),
            visited_cycles: HashSet::new(),
            depth: 0,
        }
    }

    /// True when `edge` is currently open on this path.
    pub fn is_open(&self, edge: EdgeId) -> bool {
        self.visited.contains(&edge)
    }

    /// Mark `edge` as open and append it to the residual path.
    pub fn open(&mut self, edge: EdgeId) {
        self.visited.insert(edge);
        self.residual_path.push(edge);
    }

    /// Close the cycle formed by revisiting `edge`: pop the residual path back
    /// to the previous occurrence of `edge`, un-visiting every popped edge, and
    /// return the popped suffix as a closed cycle.
    ///
    /// Returns `None` when `edge` is not on the residual path, which indicates
    /// a corrupted branch state.
    pub fn close_cycle(&mut self, edge: EdgeId) -> Option<Cycle> {
        let mut suffix = Vec::new();
        while let Some(top) = self.residual_path.pop() {
            self.visited.remove(&top);
            suffix.push(top);
            if top == edge {
                suffix.reverse();
                suffix.push(edge);
                return Some(Cycle::new(suffix));
            }
        }
        None
    }

    /// Record that `cycle` was processed on this branch. Returns `false` when
    /// the same cycle (up to rotation) was already recorded.
    pub fn record_cycle(&mut self, cycle: &Cycle) -> bool {
        self.visited_cycles.insert(cycle.id())
    }

    /// A printable signature of the residual path extended by `edge`.
    pub fn signature_with(&self, edge: EdgeId) -> String {
        let mut parts: Vec<String> = self
            .residual_path
            .iter()
            .map(|it| it.to_index().to_string())
            .collect();
        parts.push(edge.to_index().to_string());
        parts.join("-")
    }
}

/// A closed cycle of edges: the entry edge appears both first and last.
pub(crate) struct Cycle {
    edges: Vec<EdgeId>,
}

impl Cycle {
    pub fn new(edges: Vec<EdgeId>) -> Cycle {
        debug_assert!(edges.len() >= 2);
        debug_assert!(edges.first() == edges.last());
        Cycle { edges }
    }

    /// The closed edge sequence, entry edge repeated at the end.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// The cycle members without the closing repetition.
    pub fn members(&self) -> &[EdgeId] {
        &self.edges[..self.edges.len() - 1]
    }

    /// The edge on which the cycle was entered and closed.
    pub fn entry(&self) -> EdgeId {
        self.edges[0]
    }

    /// A rotation-independent identifier of this cycle.
    pub fn id(&self) -> CycleId {
        let mut members: Vec<EdgeId> = self.members().to_vec();
        members.sort();
        CycleId(members.into_boxed_slice())
    }
}

impl Display for Cycle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .edges
            .iter()
            .map(|it| it.to_index().to_string())
            .collect();
        write!(f, "{}", parts.join("-"))
    }
}

/// The sorted member set of a cycle, used to deduplicate rotations of the same
/// loop within one branch.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) struct CycleId(Box<[EdgeId]>);
