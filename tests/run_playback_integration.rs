//! Integration tests for run playback over the seed pipelines
//!
//! These tests drive the sequencer with a manual clock against the
//! shipped demo graphs, the same way the frame loop does.

mod common;

use common::builders::{chain_graph, manual_sequencer, sequential_script};
use common::run_for;

use flowcanvas::graph::DemoGraph;
use flowcanvas::sequencer::RunState;

#[test]
fn test_linear_demo_plays_to_completion() {
    let (graph, script) = DemoGraph::Linear.build().expect("seed graph builds");
    let expected: Vec<_> = script.steps().iter().map(|s| s.node).collect();
    let (mut seq, clock) = manual_sequencer(script);

    seq.start();
    assert_eq!(seq.state(), RunState::Running);

    run_for(&mut seq, &clock, 6000);

    assert_eq!(seq.state(), RunState::Idle);
    assert_eq!(seq.completed(), expected.as_slice());
    assert_eq!(seq.completed().len(), graph.nodes().len());
    assert_eq!(seq.active_node(), None);
}

#[test]
fn test_branching_demo_gates_result_on_both_models() {
    let (graph, script) = DemoGraph::Branching.build().expect("seed graph builds");
    let result_node = script.steps().last().expect("non-empty script").node;
    let (mut seq, clock) = manual_sequencer(script);

    seq.start();

    // The result node must never complete before every other node has.
    let mut saw_result = false;
    for _ in 0..800 {
        run_for(&mut seq, &clock, 10);
        if seq.is_completed(result_node) && !saw_result {
            saw_result = true;
            for node in graph.node_ids() {
                assert!(seq.is_completed(node), "{:?} completed before join", node);
            }
        }
    }
    assert!(saw_result, "run never reached the result node");
    assert_eq!(seq.state(), RunState::Idle);
}

#[test]
fn test_progress_is_monotonic_while_active() {
    let (_, script) = DemoGraph::Linear.build().expect("seed graph builds");
    let (mut seq, clock) = manual_sequencer(script);
    seq.start();

    let first = seq.active_node().expect("first step active immediately");
    let mut last_progress = seq.progress();
    while seq.active_node() == Some(first) {
        run_for(&mut seq, &clock, 10);
        if seq.active_node() == Some(first) {
            assert!(seq.progress() >= last_progress);
            last_progress = seq.progress();
        }
    }
    assert!(seq.is_completed(first));
}

#[test]
fn test_restart_mid_run_supersedes_previous_run() {
    let graph = chain_graph(4);
    let script = sequential_script(&graph, 800);
    let (mut seq, clock) = manual_sequencer(script);

    seq.start();
    // Finish stage 0; stage 1's activation timer is now pending.
    run_for(&mut seq, &clock, 1000);
    assert_eq!(seq.completed().len(), 1);

    seq.start();
    // Cross the superseded timer's deadline. The fresh run must show
    // only its own state.
    run_for(&mut seq, &clock, 900);
    let first = graph.node_ids().next().expect("non-empty graph");
    assert_eq!(seq.active_node(), Some(first));
    assert!(seq.completed().is_empty());

    run_for(&mut seq, &clock, 10_000);
    assert_eq!(seq.state(), RunState::Idle);
    assert_eq!(seq.completed().len(), 4);
}

#[test]
fn test_runs_are_repeatable() {
    let graph = chain_graph(3);
    let script = sequential_script(&graph, 700);
    let (mut seq, clock) = manual_sequencer(script);

    for _ in 0..3 {
        seq.start();
        run_for(&mut seq, &clock, 8000);
        assert_eq!(seq.state(), RunState::Idle);
        assert_eq!(seq.completed().len(), 3);
    }
}
