use crate::model::{ControlPoint, EdgeId, Interval, ReachTask, SpdiEdge, SpdiGraph};

/// Initialize env_logger for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Creates an edge from its name, successor indices and control points.
///
/// # Example
///
/// `mk_edge("e0", &[1, 2], (0.0, 1.0), (0.1, 0.9))` is an edge named `e0`
/// with successors `e1` and `e2`, identity lower map and slightly contracting
/// upper map.
pub fn mk_edge(
    name: &str,
    successors: &[usize],
    lower: (f64, f64),
    upper: (f64, f64),
) -> SpdiEdge {
    SpdiEdge {
        name: name.to_string(),
        successors: successors.iter().map(|&it| EdgeId::from_index(it)).collect(),
        lower: ControlPoint(lower.0, lower.1),
        upper: ControlPoint(upper.0, upper.1),
    }
}

/// Creates a graph of identity-map edges (both control points `(0.0, 1.0)`)
/// from an adjacency list. Edge `i` is named `e{i}`.
///
/// Identity edges forward every interval unchanged, which makes the shape of
/// the search visible in tests without any interval arithmetic.
pub fn identity_graph(successors: &[&[usize]]) -> SpdiGraph {
    let edges = successors
        .iter()
        .enumerate()
        .map(|(index, adjacent)| mk_edge(&format!("e{}", index), adjacent, (0.0, 1.0), (0.0, 1.0)))
        .collect();
    SpdiGraph::new(edges)
}

/// Creates a task from lists of `(edge index, (lo, hi))` start and final parts.
pub fn mk_task(starts: &[(usize, (f64, f64))], finals: &[(usize, (f64, f64))]) -> ReachTask {
    let mut task = ReachTask::new();
    for &(edge, (lo, hi)) in starts {
        task.start_edge_parts
            .insert(EdgeId::from_index(edge), Interval::new(lo, hi));
    }
    for &(edge, (lo, hi)) in finals {
        task.final_edge_parts
            .insert(EdgeId::from_index(edge), Interval::new(lo, hi));
    }
    task
}

/// Asserts that two floating point values agree up to a small tolerance.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "Expected {} but computed {}.",
        expected,
        actual
    );
}
