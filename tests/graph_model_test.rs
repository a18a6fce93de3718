//! Property tests for graph model invariants
//!
//! Validates viewport clamping and collapse behavior across arbitrary
//! inputs, plus edge path consistency after mutation.

mod common;

use common::builders::chain_graph;

use egui::{Pos2, Vec2};
use proptest::prelude::*;

use flowcanvas::graph::{NodeId, NODE_WIDTH};

proptest! {
    #[test]
    fn test_moved_nodes_stay_inside_viewport(
        x in -5000.0f32..5000.0,
        y in -5000.0f32..5000.0,
        vw in 300.0f32..3000.0,
        vh in 300.0f32..3000.0,
    ) {
        let mut graph = chain_graph(3);
        graph.set_viewport(Vec2::new(vw, vh));
        let id = NodeId(1);
        graph.move_node(id, Pos2::new(x, y));

        let node = graph.node(id).unwrap();
        let size = node.size();
        prop_assert!(node.position.x >= 0.0);
        prop_assert!(node.position.y >= 0.0);
        prop_assert!(node.position.x + size.x <= vw + f32::EPSILON);
        prop_assert!(node.position.y + size.y <= vh + f32::EPSILON);
    }

    #[test]
    fn test_edge_paths_track_anchor_positions(
        x in 0.0f32..600.0,
        y in 0.0f32..400.0,
    ) {
        let mut graph = chain_graph(2);
        graph.set_viewport(Vec2::new(2000.0, 2000.0));
        graph.move_node(NodeId(0), Pos2::new(x, y));

        let edge = &graph.edges()[0];
        let from = graph.node(edge.from.node).unwrap();
        let to = graph.node(edge.to.node).unwrap();
        prop_assert_eq!(edge.path.start, from.output_anchor(edge.from.port));
        prop_assert_eq!(edge.path.end, to.input_anchor(edge.to.port));
    }

    #[test]
    fn test_collapse_toggle_is_an_involution(
        x in 0.0f32..1000.0,
        y in 0.0f32..1000.0,
    ) {
        let mut graph = chain_graph(2);
        graph.set_viewport(Vec2::new(2000.0, 2000.0));
        graph.move_node(NodeId(0), Pos2::new(x, y));

        let before_pos = graph.node(NodeId(0)).unwrap().position;
        let before_path = graph.edges()[0].path;

        graph.toggle_collapse(NodeId(0));
        graph.toggle_collapse(NodeId(0));

        let node = graph.node(NodeId(0)).unwrap();
        prop_assert!(!node.collapsed);
        prop_assert_eq!(node.position, before_pos);
        prop_assert_eq!(graph.edges()[0].path, before_path);
    }
}

#[test]
fn test_collapsed_node_routes_edges_through_header() {
    let mut graph = chain_graph(2);
    graph.toggle_collapse(NodeId(0));

    let node = graph.node(NodeId(0)).unwrap();
    let edge = &graph.edges()[0];
    assert_eq!(edge.path.start.x, node.position.x + NODE_WIDTH);
    assert!(edge.path.start.y < node.position.y + node.size().y);
}
