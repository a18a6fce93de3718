//! Declarative run scripts.
//!
//! The run animation is content, not scheduling: each seed graph ships
//! an authored, ordered list of steps with hand-picked inter-node
//! delays. Representing the sequence as data (rather than inline
//! callback chains) is what lets tests drive it with a manual clock.

use std::time::Duration;

use crate::error::{FlowCanvasError, Result};
use crate::graph::{GraphModel, NodeId};

/// Per-node duration used by the authored demo scripts.
pub const DEFAULT_STEP_DURATION: Duration = Duration::from_millis(1000);

/// Pause between the last completion and the return to `Idle`.
pub const TRAILING_DELAY: Duration = Duration::from_millis(600);

/// One step of a run script.
#[derive(Debug, Clone)]
pub struct RunStep {
    pub node: NodeId,
    /// Authored pause before this node activates, measured from the
    /// previous step's completion. Ignored for the first step, which
    /// activates immediately on `start()`.
    pub delay: Duration,
    /// How long the node stays active while its progress fills.
    pub duration: Duration,
    /// Nodes that must be completed before this step may activate.
    pub joins_on: Vec<NodeId>,
}

impl RunStep {
    pub fn new(node: NodeId, delay_ms: u64) -> Self {
        Self {
            node,
            delay: Duration::from_millis(delay_ms),
            duration: DEFAULT_STEP_DURATION,
            joins_on: Vec::new(),
        }
    }

    pub fn joining(node: NodeId, delay_ms: u64, joins_on: Vec<NodeId>) -> Self {
        Self {
            node,
            delay: Duration::from_millis(delay_ms),
            duration: DEFAULT_STEP_DURATION,
            joins_on,
        }
    }
}

/// An ordered run script over a graph's nodes.
#[derive(Debug, Clone, Default)]
pub struct RunScript {
    steps: Vec<RunStep>,
}

impl RunScript {
    pub fn new(steps: Vec<RunStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[RunStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Check the script against its graph:
    /// - every step references an existing node,
    /// - no node appears twice,
    /// - every `joins_on` entry is scheduled by an earlier step.
    ///
    /// The last rule guarantees a join can always be satisfied, since
    /// activation follows script order.
    pub fn validate(&self, graph: &GraphModel) -> Result<()> {
        let mut seen: Vec<NodeId> = Vec::with_capacity(self.steps.len());
        for (index, step) in self.steps.iter().enumerate() {
            if graph.node(step.node).is_none() {
                return Err(FlowCanvasError::Script(format!(
                    "step {} references unknown node {:?}",
                    index, step.node
                )));
            }
            if seen.contains(&step.node) {
                return Err(FlowCanvasError::Script(format!(
                    "node {:?} is scheduled more than once",
                    step.node
                )));
            }
            for join in &step.joins_on {
                if !seen.contains(join) {
                    return Err(FlowCanvasError::Script(format!(
                        "step {} joins on {:?}, which is not scheduled earlier",
                        index, join
                    )));
                }
            }
            seen.push(step.node);
        }
        Ok(())
    }
}
