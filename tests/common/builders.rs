//! Graph and script builders for tests

use std::time::Instant;

use egui::Pos2;

use flowcanvas::graph::{GraphModel, Node, NodeId, NodeKind, PortRef};
use flowcanvas::graph::{Port, PortKind};
use flowcanvas::sequencer::{ManualClock, RunScript, RunSequencer, RunStep};

/// Build a left-to-right chain of `count` process nodes, fully wired.
pub fn chain_graph(count: usize) -> GraphModel {
    let mut graph = GraphModel::new();
    let ids: Vec<NodeId> = (0..count)
        .map(|i| {
            graph.add_node(
                Node::new(
                    NodeKind::Process,
                    format!("Stage {}", i),
                    Pos2::new(100.0 + 250.0 * i as f32, 150.0),
                )
                .with_inputs(vec![Port::new("in", PortKind::Data)])
                .with_outputs(vec![Port::new("out", PortKind::Data)]),
            )
        })
        .collect();

    for pair in ids.windows(2) {
        graph
            .add_edge(PortRef::new(pair[0], 0), PortRef::new(pair[1], 0))
            .expect("chain edges are in range");
    }
    graph
}

/// A script that visits every node of `graph` in insertion order.
pub fn sequential_script(graph: &GraphModel, delay_ms: u64) -> RunScript {
    let steps = graph
        .node_ids()
        .enumerate()
        .map(|(i, id)| RunStep::new(id, if i == 0 { 0 } else { delay_ms }))
        .collect();
    RunScript::new(steps)
}

/// A sequencer driven by a manual clock, for deterministic playback.
pub fn manual_sequencer(script: RunScript) -> (RunSequencer, ManualClock) {
    let clock = ManualClock::new(Instant::now());
    let seq = RunSequencer::with_clock(script, Box::new(clock.clone()));
    (seq, clock)
}
