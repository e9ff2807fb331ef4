//! The numeric kernel of the analysis: how intervals move along the edges of an
//! SPDI graph.
//!
//! The search engine and the cycle classifier are generic over [`EdgeDynamics`],
//! which defines one transition step, the per-side boundary motion used by cycle
//! acceleration, and the fixed-point extrapolation of an affine map.
//! [`AmfDynamics`] is the shipped implementation over affine multivalued maps;
//! alternative kernels (for instance with different rounding or domain
//! conventions) can be plugged in without touching the search itself.

mod amf;

pub use amf::AmfDynamics;

use crate::model::{EdgeId, Interval, SpdiGraph};

/// Which extremal map of an edge a boundary sample follows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

/// The interval/affine primitives consumed by the reachability search.
///
/// Implementors are stateless strategy types: all methods are associated
/// functions reading the per-edge control data of the graph. This keeps the
/// kernel trivially shareable across concurrent search branches.
pub trait EdgeDynamics {
    /// The image on `to` induced by `interval` on `from` after one transition
    /// step, computed from the control data of `from`.
    ///
    /// The image must not be clamped into the domain: an image escaping `[0, 1]`
    /// is reported as an invalid interval, which the search treats as a branch
    /// that died out of the model's domain.
    fn successor_interval(
        graph: &SpdiGraph,
        interval: Interval,
        from: EdgeId,
        to: EdgeId,
    ) -> Interval;

    /// The position of a single boundary `point` after one application of the
    /// whole `cycle`, following the given extremal `side` on every hop.
    ///
    /// `cycle` is a closed edge sequence (the first edge repeated at the end).
    fn iterated_boundary_point(graph: &SpdiGraph, point: f64, cycle: &[EdgeId], side: Side) -> f64;

    /// The limit of repeatedly applying `y = a*y + b` starting from `x`, clamped
    /// into `[0, 1]`.
    ///
    /// Total for every combination of inputs: the identity (`a = 1, b = 0`) keeps
    /// `x`; a pure translation escapes toward the pushed domain end; a contractive
    /// map converges to its fixed point `b / (1 - a)`; an expansive map escapes
    /// away from its repelling fixed point unless `x` sits exactly on it.
    fn extrapolate_fixed_point(a: f64, b: f64, x: f64) -> f64 {
        if a == 1.0 {
            if b == 0.0 {
                x.clamp(0.0, 1.0)
            } else if b > 0.0 {
                1.0
            } else {
                0.0
            }
        } else if a.abs() < 1.0 {
            (b / (1.0 - a)).clamp(0.0, 1.0)
        } else {
            let fixed = b / (1.0 - a);
            if x == fixed {
                x.clamp(0.0, 1.0)
            } else if a * x + b > x {
                1.0
            } else {
                0.0
            }
        }
    }
}
