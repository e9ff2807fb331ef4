use crate::dynamics::{EdgeDynamics, Side};
use crate::model::{ControlPoint, EdgeId, Interval, SpdiGraph};

/// [`EdgeDynamics`] over affine multivalued functions.
///
/// Every edge carries two control points describing the affine maps followed by
/// its left and right boundary; the one-step image of an interval is spanned by
/// the lower map at the left endpoint and the upper map at the right endpoint.
pub struct AmfDynamics;

/// Evaluates the affine map described by `point` at `x`.
///
/// `point.0` is the image of `0` and `point.1` the image of `1`.
fn affine(point: ControlPoint, x: f64) -> f64 {
    point.0 + (point.1 - point.0) * x
}

impl EdgeDynamics for AmfDynamics {
    fn successor_interval(
        graph: &SpdiGraph,
        interval: Interval,
        from: EdgeId,
        _to: EdgeId,
    ) -> Interval {
        Interval::new(
            affine(graph.lower(from), interval.lo),
            affine(graph.upper(from), interval.hi),
        )
    }

    fn iterated_boundary_point(graph: &SpdiGraph, point: f64, cycle: &[EdgeId], side: Side) -> f64 {
        let mut result = point;
        for hop in cycle.windows(2) {
            let control = match side {
                Side::Left => graph.lower(hop[0]),
                Side::Right => graph.upper(hop[0]),
            };
            result = affine(control, result);
        }
        result
    }
}
