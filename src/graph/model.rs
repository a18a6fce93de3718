//! The graph model — authoritative node/edge storage.
//!
//! Owns the node and edge collections and exposes the mutations the
//! canvas performs: position updates (clamped to the viewport), collapse
//! toggles, and edge-path recomputation. All id-taking operations treat
//! unknown ids as silent no-ops; there is no error path in this model.

use egui::{Pos2, Vec2};

use crate::error::{FlowCanvasError, Result};

use super::edge::{CubicPath, Edge, PortRef};
use super::id::{EdgeId, NodeId};
use super::node::Node;

/// In-memory pipeline graph: nodes, edges, and the viewport bounds used
/// for position clamping.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    /// Canvas-unit viewport size, when known. Clamping is skipped until
    /// the first layout pass reports it.
    viewport: Option<Vec2>,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Graph building ──

    /// Add a node to the graph. Returns its NodeId.
    pub fn add_node(&mut self, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        node.id = id;
        self.nodes.push(node);
        id
    }

    /// Connect an output port of `from` to an input port of `to`.
    ///
    /// Seed-time only; fails if either port reference is out of range.
    pub fn add_edge(&mut self, from: PortRef, to: PortRef) -> Result<EdgeId> {
        let from_anchor = self
            .nodes
            .get(from.node.index())
            .filter(|n| from.port < n.outputs.len())
            .map(|n| n.output_anchor(from.port))
            .ok_or_else(|| {
                FlowCanvasError::Graph(format!("invalid edge source {:?}:{}", from.node, from.port))
            })?;
        let to_anchor = self
            .nodes
            .get(to.node.index())
            .filter(|n| to.port < n.inputs.len())
            .map(|n| n.input_anchor(to.port))
            .ok_or_else(|| {
                FlowCanvasError::Graph(format!("invalid edge target {:?}:{}", to.node, to.port))
            })?;

        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge {
            id,
            from,
            to,
            path: CubicPath::between(from_anchor, to_anchor),
        });

        // Mark the endpoint ports as connected (display-only flag).
        self.nodes[from.node.index()].outputs[from.port].connected = true;
        self.nodes[to.node.index()].inputs[to.port].connected = true;

        Ok(id)
    }

    // ── Accessors ──

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    pub fn viewport(&self) -> Option<Vec2> {
        self.viewport
    }

    // ── Mutations ──

    /// Record the viewport size and re-clamp every node into it.
    pub fn set_viewport(&mut self, size: Vec2) {
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        self.viewport = Some(size);
        let ids: Vec<NodeId> = self.node_ids().collect();
        for id in ids {
            let pos = self.nodes[id.index()].position;
            self.move_node(id, pos);
        }
    }

    /// Move a node, clamping its bounding box into the viewport when the
    /// viewport size is known. Unknown ids are a no-op.
    pub fn move_node(&mut self, id: NodeId, new_position: Pos2) {
        let Some(node) = self.nodes.get_mut(id.index()) else {
            return;
        };
        let mut pos = new_position;
        if let Some(viewport) = self.viewport {
            let size = node.size();
            // When the node is larger than the viewport, pin to origin.
            pos.x = pos.x.clamp(0.0, (viewport.x - size.x).max(0.0));
            pos.y = pos.y.clamp(0.0, (viewport.y - size.y).max(0.0));
        }
        node.position = pos;
        self.recompute_edge_paths_for(id);
    }

    /// Flip a node's collapsed flag. Affects rendered height and edge
    /// anchors, not the run sequencer. Unknown ids are a no-op.
    pub fn toggle_collapse(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get_mut(id.index()) else {
            return;
        };
        node.collapsed = !node.collapsed;
        // Collapsing shrinks the bounding box; expanding may push it
        // past the viewport edge, so re-clamp.
        let pos = node.position;
        self.move_node(id, pos);
    }

    /// Recompute the cached path of every edge.
    pub fn recompute_edge_paths(&mut self) {
        for i in 0..self.edges.len() {
            self.recompute_edge_path(i);
        }
    }

    /// Recompute only the edges touching `id`.
    fn recompute_edge_paths_for(&mut self, id: NodeId) {
        for i in 0..self.edges.len() {
            let edge = &self.edges[i];
            if edge.from.node == id || edge.to.node == id {
                self.recompute_edge_path(i);
            }
        }
    }

    fn recompute_edge_path(&mut self, index: usize) {
        let edge = &self.edges[index];
        let (Some(from), Some(to)) = (
            self.nodes.get(edge.from.node.index()),
            self.nodes.get(edge.to.node.index()),
        ) else {
            return;
        };
        let start = from.output_anchor(edge.from.port);
        let end = to.input_anchor(edge.to.port);
        self.edges[index].path = CubicPath::between(start, end);
    }
}
