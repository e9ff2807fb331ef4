//! Unit tests of the cycle classification, driving `classify_cycle` directly
//! with hand-built cycles instead of going through the search.

use crate::dynamics::AmfDynamics;
use crate::model::{EdgeId, Interval, SpdiGraph};
use crate::solver::SolverConfig;
use crate::solver::classifier::classify_cycle;
use crate::solver::path_state::Cycle;
use crate::test_utils::{assert_close, identity_graph, init_logger, mk_edge, mk_task};

fn cycle_of(indices: &[usize]) -> Cycle {
    Cycle::new(indices.iter().map(|&it| EdgeId::from_index(it)).collect())
}

#[test]
fn phase_one_accepts_partway_through_the_loop() {
    init_logger();
    let config = SolverConfig::from(identity_graph(&[&[1], &[2], &[0]]));
    let task = mk_task(&[], &[(1, (0.1, 0.3))]);
    let seed = Interval::new(0.2, 0.25);

    let outcome = classify_cycle::<AmfDynamics>(&config, &task, &cycle_of(&[0, 1, 2, 0]), seed)
        .unwrap();
    assert!(outcome.accepted);
    // Acceptance happened before the image moved, so the candidate is the seed.
    assert_eq!(outcome.candidates, vec![seed]);
}

#[test]
fn dying_cycle_returns_last_valid_image() {
    init_logger();
    let config = SolverConfig::from(SpdiGraph::new(vec![
        mk_edge("e0", &[1], (0.0, 1.0), (0.0, 1.0)),
        mk_edge("e1", &[0], (-0.05, 0.45), (-0.05, 0.45)),
    ]));
    let task = mk_task(&[], &[]);

    let outcome = classify_cycle::<AmfDynamics>(
        &config,
        &task,
        &cycle_of(&[0, 1, 0]),
        Interval::new(0.4, 0.5),
    )
    .unwrap();
    assert!(!outcome.accepted);
    // [0.4, 0.5] -> [0.15, 0.2] -> [0.025, 0.05] -> below zero.
    assert_eq!(outcome.candidates.len(), 1);
    assert_close(outcome.candidates[0].lo, 0.025);
    assert_close(outcome.candidates[0].hi, 0.05);
}

#[test]
fn converging_cycle_accelerates_to_the_limit_interval() {
    init_logger();
    let config = SolverConfig::from(SpdiGraph::new(vec![
        mk_edge("e0", &[1], (0.0, 1.0), (0.0, 1.0)),
        mk_edge("e1", &[0], (0.4, 0.9), (0.45, 0.95)),
    ]));
    let task = mk_task(&[], &[(0, (0.85, 0.95))]);

    let outcome = classify_cycle::<AmfDynamics>(
        &config,
        &task,
        &cycle_of(&[0, 1, 0]),
        Interval::new(0.45, 0.55),
    )
    .unwrap();
    // The boundary maps converge to 0.8 (left) and 0.9 (right); the hull of
    // the converged interval and both limits reaches the goal.
    assert!(outcome.accepted);
    assert_eq!(outcome.candidates.len(), 1);
    assert_close(outcome.candidates[0].lo, 0.625);
    assert_close(outcome.candidates[0].hi, 0.9);
}

#[test]
fn degenerate_convergence_yields_no_candidate() {
    init_logger();
    let config = SolverConfig::from(identity_graph(&[&[0]]));
    let task = mk_task(&[], &[]);

    let outcome = classify_cycle::<AmfDynamics>(
        &config,
        &task,
        &cycle_of(&[0, 0]),
        Interval::new(0.5, 0.5),
    )
    .unwrap();
    assert!(!outcome.accepted);
    assert_eq!(outcome.candidates.len(), 1);
    assert!(!outcome.candidates[0].is_valid());
}

#[test]
fn identity_loop_bounding_interval_is_the_seed() {
    init_logger();
    let config = SolverConfig::from(identity_graph(&[&[0]]));
    let task = mk_task(&[], &[]);

    let outcome = classify_cycle::<AmfDynamics>(
        &config,
        &task,
        &cycle_of(&[0, 0]),
        Interval::new(0.3, 0.6),
    )
    .unwrap();
    // Identity boundary maps fix both endpoints, so nothing is extended.
    assert!(!outcome.accepted);
    assert_eq!(outcome.candidates, vec![Interval::new(0.3, 0.6)]);
}
