//! Edges and their rendered paths.
//!
//! An edge connects one node's output port to another node's input
//! port. Its cubic path is cached on the edge and recomputed by the
//! graph model whenever either endpoint node moves or collapses.

use egui::Pos2;

use super::id::{EdgeId, NodeId};

/// Reference to a specific port on a specific node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRef {
    pub node: NodeId,
    /// Index into the node's input or output port list.
    pub port: usize,
}

impl PortRef {
    pub fn new(node: NodeId, port: usize) -> Self {
        Self { node, port }
    }
}

/// A cubic bezier between two port anchors.
///
/// Control points pull horizontally toward the midpoint, giving the
/// classic node-editor S-curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicPath {
    pub start: Pos2,
    pub control1: Pos2,
    pub control2: Pos2,
    pub end: Pos2,
}

impl CubicPath {
    /// Build the path between an output anchor and an input anchor.
    pub fn between(start: Pos2, end: Pos2) -> Self {
        let mid_x = (start.x + end.x) * 0.5;
        Self {
            start,
            control1: Pos2::new(mid_x, start.y),
            control2: Pos2::new(mid_x, end.y),
            end,
        }
    }

    /// Sample points along the curve for polyline rendering.
    pub fn points(&self, segments: usize) -> Vec<Pos2> {
        (0..=segments)
            .map(|i| {
                let t = i as f32 / segments as f32;
                let u = 1.0 - t;
                let tt = t * t;
                let uu = u * u;
                let uuu = uu * u;
                let ttt = tt * t;
                Pos2::new(
                    uuu * self.start.x
                        + 3.0 * uu * t * self.control1.x
                        + 3.0 * u * tt * self.control2.x
                        + ttt * self.end.x,
                    uuu * self.start.y
                        + 3.0 * uu * t * self.control1.y
                        + 3.0 * u * tt * self.control2.y
                        + ttt * self.end.y,
                )
            })
            .collect()
    }
}

/// A directed connection from an output port to an input port.
#[derive(Debug, Clone)]
pub struct Edge {
    pub id: EdgeId,
    pub from: PortRef,
    pub to: PortRef,
    /// Cached path in canvas units; recomputed on endpoint movement.
    pub path: CubicPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_endpoints() {
        let path = CubicPath::between(Pos2::new(0.0, 0.0), Pos2::new(100.0, 50.0));
        let points = path.points(16);
        assert_eq!(points.first().copied(), Some(path.start));
        assert_eq!(points.last().copied(), Some(path.end));
        assert_eq!(points.len(), 17);
    }

    #[test]
    fn test_control_points_at_horizontal_midpoint() {
        let path = CubicPath::between(Pos2::new(10.0, 20.0), Pos2::new(30.0, 80.0));
        assert_eq!(path.control1.x, 20.0);
        assert_eq!(path.control2.x, 20.0);
        assert_eq!(path.control1.y, 20.0);
        assert_eq!(path.control2.y, 80.0);
    }
}
