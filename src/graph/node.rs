//! Node types for the pipeline graph.
//!
//! A node is a typed unit with a canvas position, a collapse flag, and
//! ordered, labeled ports. Geometry helpers here (size, port anchors)
//! are in canvas units; the canvas view applies pan/zoom on top.

use egui::{Pos2, Vec2};

use super::id::NodeId;
use super::port::Port;

/// Node width in canvas units.
pub const NODE_WIDTH: f32 = 140.0;
/// Height of the title bar (the only part visible when collapsed).
pub const NODE_HEADER_HEIGHT: f32 = 28.0;
/// Height of one port row in the expanded body.
pub const PORT_ROW_HEIGHT: f32 = 18.0;
/// Minimum body height so port-less nodes still read as cards.
pub const NODE_MIN_BODY_HEIGHT: f32 = 22.0;

/// The role of a node in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Starting point for data (user input, file, prompt).
    Input,
    /// A processing unit, typically an AI model.
    Process,
    /// Final result destination.
    Output,
}

/// A unit in the pipeline graph.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub title: String,
    /// Top-left corner in canvas units.
    pub position: Pos2,
    pub collapsed: bool,
    pub inputs: Vec<Port>,
    pub outputs: Vec<Port>,
}

impl Node {
    pub fn new(kind: NodeKind, title: impl Into<String>, position: Pos2) -> Self {
        Self {
            id: NodeId::INVALID,
            kind,
            title: title.into(),
            position,
            collapsed: false,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn with_inputs(mut self, inputs: Vec<Port>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<Port>) -> Self {
        self.outputs = outputs;
        self
    }

    /// Number of port rows in the expanded body.
    fn port_rows(&self) -> usize {
        self.inputs.len().max(self.outputs.len())
    }

    /// Rendered bounding-box size, accounting for the collapse state.
    pub fn size(&self) -> Vec2 {
        let height = if self.collapsed {
            NODE_HEADER_HEIGHT
        } else {
            let body = (self.port_rows() as f32 * PORT_ROW_HEIGHT).max(NODE_MIN_BODY_HEIGHT);
            NODE_HEADER_HEIGHT + body
        };
        Vec2::new(NODE_WIDTH, height)
    }

    /// Vertical center of a port row, relative to the node top.
    ///
    /// Collapsed nodes route all edges through the header center.
    fn port_row_y(&self, port_index: usize) -> f32 {
        if self.collapsed {
            NODE_HEADER_HEIGHT * 0.5
        } else {
            NODE_HEADER_HEIGHT + port_index as f32 * PORT_ROW_HEIGHT + PORT_ROW_HEIGHT * 0.5
        }
    }

    /// Anchor point for an input port, on the node's left edge.
    pub fn input_anchor(&self, port_index: usize) -> Pos2 {
        Pos2::new(self.position.x, self.position.y + self.port_row_y(port_index))
    }

    /// Anchor point for an output port, on the node's right edge.
    pub fn output_anchor(&self, port_index: usize) -> Pos2 {
        Pos2::new(
            self.position.x + NODE_WIDTH,
            self.position.y + self.port_row_y(port_index),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::port::PortKind;

    fn sample_node() -> Node {
        Node::new(NodeKind::Process, "GPT-4", Pos2::new(100.0, 50.0))
            .with_inputs(vec![Port::new("prompt", PortKind::Text)])
            .with_outputs(vec![
                Port::new("completion", PortKind::Text),
                Port::new("usage", PortKind::Data),
            ])
    }

    #[test]
    fn test_size_tracks_port_rows() {
        let node = sample_node();
        let expanded = node.size();
        assert_eq!(expanded.x, NODE_WIDTH);
        assert_eq!(expanded.y, NODE_HEADER_HEIGHT + 2.0 * PORT_ROW_HEIGHT);
    }

    #[test]
    fn test_collapsed_size_is_header_only() {
        let mut node = sample_node();
        node.collapsed = true;
        assert_eq!(node.size().y, NODE_HEADER_HEIGHT);
    }

    #[test]
    fn test_anchors_follow_collapse_state() {
        let mut node = sample_node();
        let expanded = node.output_anchor(1);
        node.collapsed = true;
        let collapsed = node.output_anchor(1);
        assert!(expanded.y > collapsed.y);
        assert_eq!(collapsed.y, node.position.y + NODE_HEADER_HEIGHT * 0.5);
        assert_eq!(collapsed.x, node.position.x + NODE_WIDTH);
    }
}
