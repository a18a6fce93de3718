//! Canvas view state — pan, zoom, and node dragging.
//!
//! The transform between canvas units ("world") and screen pixels is
//! `screen = (world + pan) × zoom`, with `pan` accumulated in canvas
//! units and screen deltas divided by the current scale. Zoom is
//! anchored at the pointer: the canvas point under the cursor stays
//! stationary across a zoom step.
//!
//! This module is pure math; egui painting and event plumbing live in
//! the pipeline canvas pane.

use egui::{Pos2, Vec2};

use crate::graph::NodeId;

/// Multiplicative zoom step per wheel tick, zooming in.
pub const ZOOM_STEP_IN: f32 = 1.1;
/// Multiplicative zoom step per wheel tick, zooming out.
pub const ZOOM_STEP_OUT: f32 = 0.9;
/// Zoom scale bounds.
pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 2.0;

/// An in-flight node drag.
#[derive(Debug, Clone, Copy)]
struct NodeDrag {
    node: NodeId,
    /// `node_position − pointer_world` at pointer-down; keeps the grab
    /// point under the cursor for the whole drag.
    grab_offset: Vec2,
}

/// Pan/zoom/drag state for one canvas instance.
#[derive(Debug, Clone)]
pub struct CanvasState {
    /// Pan offset in canvas units.
    pub pan: Vec2,
    /// Scale factor, within [`MIN_ZOOM`, `MAX_ZOOM`].
    pub zoom: f32,
    drag: Option<NodeDrag>,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            drag: None,
        }
    }
}

impl CanvasState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset pan and zoom (toolbar "reset view").
    pub fn reset_view(&mut self) {
        self.pan = Vec2::ZERO;
        self.zoom = 1.0;
    }

    // ── Transforms ──
    // Screen coordinates here are relative to the canvas origin (the
    // pane's top-left corner).

    pub fn to_screen(&self, world: Pos2) -> Pos2 {
        ((world.to_vec2() + self.pan) * self.zoom).to_pos2()
    }

    pub fn to_world(&self, screen: Pos2) -> Pos2 {
        (screen.to_vec2() / self.zoom - self.pan).to_pos2()
    }

    // ── Pan ──

    /// Accumulate a screen-space drag delta into the pan offset.
    pub fn pan_by(&mut self, screen_delta: Vec2) {
        self.pan += screen_delta / self.zoom;
    }

    // ── Zoom ──

    /// Apply wheel ticks (positive = in, negative = out), anchored so
    /// the canvas point under `anchor_screen` does not move.
    pub fn zoom_by_ticks(&mut self, ticks: i32, anchor_screen: Pos2) {
        if ticks == 0 {
            return;
        }
        let step = if ticks > 0 { ZOOM_STEP_IN } else { ZOOM_STEP_OUT };
        let factor = step.powi(ticks.abs());
        let old_zoom = self.zoom;
        let new_zoom = (old_zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if new_zoom == old_zoom {
            return;
        }
        // Keep the anchor's world point fixed:
        //   (world + pan) × z  =  (world + pan') × z'
        self.pan += anchor_screen.to_vec2() * (1.0 / new_zoom - 1.0 / old_zoom);
        self.zoom = new_zoom;
    }

    // ── Node drag ──

    /// Begin dragging `node`, recording the pointer offset relative to
    /// the node's current position (both in canvas units).
    pub fn begin_drag(&mut self, node: NodeId, node_position: Pos2, pointer_world: Pos2) {
        self.drag = Some(NodeDrag {
            node,
            grab_offset: node_position - pointer_world,
        });
    }

    /// Continue an in-flight drag; returns the dragged node and its new
    /// position for routing through `GraphModel::move_node`.
    pub fn drag_to(&self, pointer_world: Pos2) -> Option<(NodeId, Pos2)> {
        self.drag
            .map(|d| (d.node, pointer_world + d.grab_offset))
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn dragging(&self) -> Option<NodeId> {
        self.drag.map(|d| d.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_round_trip() {
        let mut canvas = CanvasState::new();
        canvas.pan = Vec2::new(40.0, -10.0);
        canvas.zoom = 1.5;
        let world = Pos2::new(123.0, 456.0);
        let back = canvas.to_world(canvas.to_screen(world));
        assert!((back.x - world.x).abs() < 1e-3);
        assert!((back.y - world.y).abs() < 1e-3);
    }

    #[test]
    fn test_pan_is_scale_compensated() {
        let mut canvas = CanvasState::new();
        canvas.zoom = 2.0;
        canvas.pan_by(Vec2::new(100.0, 0.0));
        assert_eq!(canvas.pan.x, 50.0);
    }

    #[test]
    fn test_zoom_steps_and_clamp() {
        let mut canvas = CanvasState::new();
        canvas.zoom_by_ticks(1, Pos2::ZERO);
        assert!((canvas.zoom - 1.1).abs() < 1e-6);
        canvas.zoom_by_ticks(-2, Pos2::ZERO);
        assert!((canvas.zoom - 1.1 * 0.9 * 0.9).abs() < 1e-6);

        canvas.zoom_by_ticks(100, Pos2::ZERO);
        assert_eq!(canvas.zoom, MAX_ZOOM);
        canvas.zoom_by_ticks(-1000, Pos2::ZERO);
        assert_eq!(canvas.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_zoom_is_anchored_at_pointer() {
        let mut canvas = CanvasState::new();
        canvas.pan = Vec2::new(25.0, 5.0);
        let anchor = Pos2::new(300.0, 200.0);
        let world_before = canvas.to_world(anchor);
        canvas.zoom_by_ticks(3, anchor);
        let world_after = canvas.to_world(anchor);
        assert!((world_before.x - world_after.x).abs() < 1e-2);
        assert!((world_before.y - world_after.y).abs() < 1e-2);
    }

    #[test]
    fn test_zoom_at_limit_keeps_pan() {
        let mut canvas = CanvasState::new();
        canvas.zoom = MAX_ZOOM;
        let pan = canvas.pan;
        canvas.zoom_by_ticks(1, Pos2::new(100.0, 100.0));
        assert_eq!(canvas.pan, pan);
        assert_eq!(canvas.zoom, MAX_ZOOM);
    }

    #[test]
    fn test_drag_keeps_grab_offset() {
        let mut canvas = CanvasState::new();
        let node_pos = Pos2::new(100.0, 150.0);
        // Grabbed 10 units right and 5 down of the node corner.
        canvas.begin_drag(NodeId(1), node_pos, Pos2::new(110.0, 155.0));
        let (id, new_pos) = canvas.drag_to(Pos2::new(210.0, 255.0)).unwrap();
        assert_eq!(id, NodeId(1));
        assert_eq!(new_pos, Pos2::new(200.0, 250.0));
        canvas.end_drag();
        assert!(canvas.drag_to(Pos2::ZERO).is_none());
    }
}
