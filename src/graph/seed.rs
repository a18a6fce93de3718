//! Seed graphs and their authored run scripts.
//!
//! The demo ships two fixed pipelines. Positions and delays are
//! hand-authored content; the delays are not derived from any cost
//! model.

use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sequencer::{RunScript, RunStep};

use super::edge::PortRef;
use super::model::GraphModel;
use super::node::{Node, NodeKind};
use super::port::{Port, PortKind};

/// Which seed pipeline the canvas shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DemoGraph {
    /// `User Input → GPT-4 → Result`.
    #[default]
    Linear,
    /// Fan-out to two models with a join at the result.
    Branching,
}

impl DemoGraph {
    pub const ALL: [DemoGraph; 2] = [DemoGraph::Linear, DemoGraph::Branching];

    pub fn display_name(self) -> &'static str {
        match self {
            DemoGraph::Linear => "Single model",
            DemoGraph::Branching => "Model comparison",
        }
    }

    /// Build the seed graph together with its run script. The script is
    /// validated against the graph before being returned.
    pub fn build(self) -> Result<(GraphModel, RunScript)> {
        let (graph, script) = match self {
            DemoGraph::Linear => linear(),
            DemoGraph::Branching => branching(),
        };
        script.validate(&graph)?;
        Ok((graph, script))
    }
}

fn linear() -> (GraphModel, RunScript) {
    let mut graph = GraphModel::new();

    let input = graph.add_node(
        Node::new(NodeKind::Input, "User Input", Pos2::new(100.0, 150.0))
            .with_outputs(vec![Port::new("text", PortKind::Text)]),
    );
    let model = graph.add_node(
        Node::new(NodeKind::Process, "GPT-4", Pos2::new(350.0, 150.0))
            .with_inputs(vec![Port::new("prompt", PortKind::Text)])
            .with_outputs(vec![
                Port::new("completion", PortKind::Text),
                Port::new("usage", PortKind::Data),
            ]),
    );
    let result = graph.add_node(
        Node::new(NodeKind::Output, "Result", Pos2::new(600.0, 150.0))
            .with_inputs(vec![Port::new("result", PortKind::Text)]),
    );

    // Seed edges cannot fail: the port refs above are in range.
    let _ = graph.add_edge(PortRef::new(input, 0), PortRef::new(model, 0));
    let _ = graph.add_edge(PortRef::new(model, 0), PortRef::new(result, 0));

    let script = RunScript::new(vec![
        RunStep::new(input, 0),
        RunStep::new(model, 900),
        RunStep::new(result, 700),
    ]);

    (graph, script)
}

fn branching() -> (GraphModel, RunScript) {
    let mut graph = GraphModel::new();

    let input = graph.add_node(
        Node::new(NodeKind::Input, "User Input", Pos2::new(80.0, 180.0))
            .with_outputs(vec![Port::new("text", PortKind::Text)]),
    );
    let gpt = graph.add_node(
        Node::new(NodeKind::Process, "GPT-4", Pos2::new(330.0, 80.0))
            .with_inputs(vec![Port::new("prompt", PortKind::Text)])
            .with_outputs(vec![Port::new("completion", PortKind::Text)]),
    );
    let claude = graph.add_node(
        Node::new(NodeKind::Process, "Claude 3", Pos2::new(330.0, 280.0))
            .with_inputs(vec![Port::new("prompt", PortKind::Text)])
            .with_outputs(vec![Port::new("completion", PortKind::Text)]),
    );
    let result = graph.add_node(
        Node::new(NodeKind::Output, "Result", Pos2::new(580.0, 180.0)).with_inputs(vec![
            Port::new("draft", PortKind::Text),
            Port::new("review", PortKind::Text),
        ]),
    );

    let _ = graph.add_edge(PortRef::new(input, 0), PortRef::new(gpt, 0));
    let _ = graph.add_edge(PortRef::new(input, 0), PortRef::new(claude, 0));
    let _ = graph.add_edge(PortRef::new(gpt, 0), PortRef::new(result, 0));
    let _ = graph.add_edge(PortRef::new(claude, 0), PortRef::new(result, 1));

    let script = RunScript::new(vec![
        RunStep::new(input, 0),
        RunStep::new(gpt, 800),
        RunStep::new(claude, 1200),
        RunStep::joining(result, 700, vec![gpt, claude]),
    ]);

    (graph, script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_seed_builds() {
        let (graph, script) = DemoGraph::Linear.build().unwrap();
        assert_eq!(graph.nodes().len(), 3);
        assert_eq!(graph.edges().len(), 2);
        assert_eq!(script.len(), 3);
    }

    #[test]
    fn test_branching_seed_has_join() {
        let (graph, script) = DemoGraph::Branching.build().unwrap();
        assert_eq!(graph.nodes().len(), 4);
        assert_eq!(graph.edges().len(), 4);
        let join = script.steps().last().unwrap();
        assert_eq!(join.joins_on.len(), 2);
    }

    #[test]
    fn test_seed_scripts_cover_every_node() {
        for demo in DemoGraph::ALL {
            let (graph, script) = demo.build().unwrap();
            assert_eq!(script.len(), graph.nodes().len());
        }
    }

    #[test]
    fn test_seed_delays_are_in_authored_range() {
        for demo in DemoGraph::ALL {
            let (_, script) = demo.build().unwrap();
            for step in script.steps().iter().skip(1) {
                let ms = step.delay.as_millis();
                assert!((700..=1500).contains(&ms), "delay {ms}ms out of range");
            }
        }
    }
}
