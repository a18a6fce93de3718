//! Pipeline Canvas pane — the node graph with run playback.
//!
//! Renders the pipeline as a node graph using custom egui painting:
//! pan/zoom, node dragging, collapse toggles, bezier edges, and the
//! per-node progress overlay while a run is playing.

use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};

use crate::canvas::CanvasState;
use crate::frontend::pane_trait::Pane;
use crate::frontend::state::{AppAction, SharedState};
use crate::frontend::workspace::PaneKind;
use crate::graph::{DemoGraph, Node, NodeId, NodeKind, NODE_HEADER_HEIGHT, NODE_WIDTH};
use crate::sequencer::RunState;

const EDGE_SEGMENTS: usize = 24;
const PORT_RADIUS: f32 = 5.0;

/// State for the Pipeline Canvas pane.
#[derive(Default)]
pub struct PipelineCanvasState {
    pub canvas: CanvasState,
}

/// Render the pipeline canvas pane.
pub fn render(
    state: &mut PipelineCanvasState,
    shared: &mut SharedState<'_>,
    ui: &mut Ui,
) -> Vec<AppAction> {
    let mut actions = Vec::new();

    render_toolbar(state, shared, ui, &mut actions);
    ui.separator();

    if let Some(error) = shared.last_error.clone() {
        ui.horizontal(|ui| {
            ui.colored_label(Color32::LIGHT_RED, error);
            if ui.small_button("✖").clicked() {
                *shared.last_error = None;
            }
        });
    }

    let canvas_size = ui.available_rect_before_wrap().size();
    let (response, painter) = ui.allocate_painter(canvas_size, Sense::click_and_drag());
    let canvas_rect = response.rect;

    // The model clamps node positions against the canvas extent in
    // canvas units, independent of zoom.
    shared.graph.set_viewport(canvas_rect.size());

    painter.rect_filled(canvas_rect, 0.0, Color32::from_gray(26));
    if shared.config.canvas.show_grid {
        draw_dot_grid(&painter, canvas_rect, &state.canvas, shared.config.canvas.grid_spacing);
    }

    handle_input(state, shared, ui, &response, canvas_rect);

    let to_screen = |p: Pos2| canvas_rect.min + state.canvas.to_screen(p).to_vec2();
    let zoom = state.canvas.zoom;

    // Edges first, behind nodes.
    for edge in shared.graph.edges() {
        let path = &edge.path;
        let points: Vec<Pos2> = crate::graph::CubicPath {
            start: to_screen(path.start),
            control1: to_screen(path.control1),
            control2: to_screen(path.control2),
            end: to_screen(path.end),
        }
        .points(EDGE_SEGMENTS);

        let source_done = shared.sequencer.completed().contains(&edge.from.node);
        let color = if source_done {
            Color32::from_rgb(80, 200, 120)
        } else {
            Color32::from_gray(150)
        };
        painter.add(egui::Shape::line(points, Stroke::new(2.0 * zoom, color)));
    }

    for node in shared.graph.nodes() {
        draw_node(&painter, shared, node, to_screen(node.position), zoom);
    }

    actions
}

fn render_toolbar(
    state: &mut PipelineCanvasState,
    shared: &mut SharedState<'_>,
    ui: &mut Ui,
    actions: &mut Vec<AppAction>,
) {
    ui.horizontal(|ui| {
        let running = shared.sequencer.state() == RunState::Running;
        if ui
            .add_enabled(!running, egui::Button::new("▶ Run"))
            .on_hover_text("Play the pipeline animation")
            .clicked()
        {
            actions.push(AppAction::StartRun);
        }

        ui.separator();

        let mut demo = shared.app_state.last_demo;
        egui::ComboBox::from_id_salt("demo_selector")
            .selected_text(demo.display_name())
            .show_ui(ui, |ui| {
                for candidate in DemoGraph::ALL {
                    ui.selectable_value(&mut demo, candidate, candidate.display_name());
                }
            });
        if demo != shared.app_state.last_demo {
            actions.push(AppAction::LoadDemo(demo));
        }

        ui.separator();

        if ui.button("Reset View").clicked() {
            state.canvas.reset_view();
        }
        ui.label(format!("{:.0}%", state.canvas.zoom * 100.0));

        // Right-aligned run status
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if running {
                let label = shared
                    .sequencer
                    .active_node()
                    .and_then(|id| shared.graph.node(id))
                    .map(|n| format!("Running: {}", n.title))
                    .unwrap_or_else(|| "Running".to_string());
                ui.colored_label(Color32::from_rgb(80, 200, 120), label);
            } else if !shared.sequencer.completed().is_empty() {
                ui.colored_label(Color32::GRAY, "Done");
            }
        });
    });
}

/// Pan, zoom, node dragging, and collapse clicks.
fn handle_input(
    state: &mut PipelineCanvasState,
    shared: &mut SharedState<'_>,
    ui: &mut Ui,
    response: &egui::Response,
    canvas_rect: Rect,
) {
    // Begin a node drag when the press lands on a node body.
    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pointer) = response.interact_pointer_pos() {
            let world = state.canvas.to_world(pointer - canvas_rect.min.to_vec2());
            if let Some(node) = topmost_node_at(shared, world) {
                let position = shared.graph.node(node).map(|n| n.position);
                if let Some(position) = position {
                    state.canvas.begin_drag(node, position, world);
                }
            }
        }
    }

    if response.dragged_by(egui::PointerButton::Primary) && state.canvas.dragging().is_some() {
        if let Some(pointer) = response.interact_pointer_pos() {
            let world = state.canvas.to_world(pointer - canvas_rect.min.to_vec2());
            if let Some((node, new_pos)) = state.canvas.drag_to(world) {
                shared.graph.move_node(node, new_pos);
            }
        }
    } else if response.dragged_by(egui::PointerButton::Middle)
        || response.dragged_by(egui::PointerButton::Secondary)
        || response.dragged_by(egui::PointerButton::Primary)
    {
        // Empty-space drag pans the canvas.
        state.canvas.pan_by(response.drag_delta());
    }

    if response.drag_stopped() {
        state.canvas.end_drag();
    }

    // Wheel zoom, anchored at the pointer.
    if response.hovered() {
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll != 0.0 {
            let ticks = if scroll > 0.0 { 1 } else { -1 };
            if let Some(pointer) = response.hover_pos() {
                state
                    .canvas
                    .zoom_by_ticks(ticks, pointer - canvas_rect.min.to_vec2());
            }
        }
    }

    // Click on a header's collapse icon toggles the node.
    if response.clicked() {
        if let Some(pointer) = response.interact_pointer_pos() {
            let world = state.canvas.to_world(pointer - canvas_rect.min.to_vec2());
            if let Some(node) = topmost_node_at(shared, world) {
                if collapse_icon_rect(shared.graph.node(node)).is_some_and(|r| r.contains(world)) {
                    shared.graph.toggle_collapse(node);
                }
            }
        }
    }
}

/// The node under a canvas-unit point, last-added first.
fn topmost_node_at(shared: &SharedState<'_>, world: Pos2) -> Option<NodeId> {
    shared
        .graph
        .nodes()
        .iter()
        .rev()
        .find(|n| Rect::from_min_size(n.position, n.size()).contains(world))
        .map(|n| n.id)
}

/// Collapse icon hit zone, in canvas units.
fn collapse_icon_rect(node: Option<&Node>) -> Option<Rect> {
    node.map(|n| {
        Rect::from_min_size(
            Pos2::new(n.position.x + NODE_WIDTH - NODE_HEADER_HEIGHT, n.position.y),
            Vec2::splat(NODE_HEADER_HEIGHT),
        )
    })
}

fn draw_dot_grid(painter: &egui::Painter, rect: Rect, canvas: &CanvasState, spacing: f32) {
    let step = spacing * canvas.zoom;
    if step < 6.0 {
        return;
    }
    // Offset so the grid scrolls with the pan.
    let offset = Vec2::new(
        (canvas.pan.x * canvas.zoom).rem_euclid(step),
        (canvas.pan.y * canvas.zoom).rem_euclid(step),
    );
    let color = Color32::from_gray(45);
    let mut y = rect.min.y + offset.y;
    while y < rect.max.y {
        let mut x = rect.min.x + offset.x;
        while x < rect.max.x {
            painter.circle_filled(Pos2::new(x, y), 1.0, color);
            x += step;
        }
        y += step;
    }
}

fn node_header_color(kind: NodeKind) -> Color32 {
    match kind {
        NodeKind::Input => Color32::from_rgb(60, 140, 60),
        NodeKind::Process => Color32::from_rgb(60, 100, 180),
        NodeKind::Output => Color32::from_rgb(200, 120, 40),
    }
}

fn draw_node(
    painter: &egui::Painter,
    shared: &SharedState<'_>,
    node: &Node,
    screen_pos: Pos2,
    zoom: f32,
) {
    let node_rect = Rect::from_min_size(screen_pos, node.size() * zoom);
    let header_rect = Rect::from_min_size(
        screen_pos,
        Vec2::new(NODE_WIDTH * zoom, NODE_HEADER_HEIGHT * zoom),
    );
    let rounding = CornerRadius::same((4.0 * zoom) as u8);

    let is_active = shared.sequencer.active_node() == Some(node.id);
    let is_done = shared.sequencer.completed().contains(&node.id);

    painter.rect_filled(node_rect, rounding, Color32::from_gray(50));
    painter.rect_filled(header_rect, rounding, node_header_color(node.kind));

    // Progress fill across the header while this node is active.
    if is_active {
        let fraction = shared.sequencer.progress() / 100.0;
        let fill = Rect::from_min_size(
            header_rect.left_bottom() - Vec2::new(0.0, 3.0 * zoom),
            Vec2::new(header_rect.width() * fraction, 3.0 * zoom),
        );
        painter.rect_filled(fill, 0.0, Color32::from_rgb(80, 200, 120));
    }

    let stroke = if is_active {
        Stroke::new(2.0 * zoom, Color32::from_rgb(80, 200, 120))
    } else if is_done {
        Stroke::new(1.5 * zoom, Color32::from_rgb(60, 150, 90))
    } else {
        Stroke::new(1.0 * zoom, Color32::from_gray(80))
    };
    painter.rect_stroke(node_rect, rounding, stroke, StrokeKind::Outside);

    let title = if is_done {
        format!("✔ {}", node.title)
    } else {
        node.title.clone()
    };
    painter.text(
        Pos2::new(header_rect.left() + 8.0 * zoom, header_rect.center().y),
        Align2::LEFT_CENTER,
        title,
        FontId::proportional(12.0 * zoom),
        Color32::WHITE,
    );

    // Collapse indicator in the header's right corner.
    painter.text(
        Pos2::new(header_rect.right() - 10.0 * zoom, header_rect.center().y),
        Align2::CENTER_CENTER,
        if node.collapsed { "▸" } else { "▾" },
        FontId::proportional(12.0 * zoom),
        Color32::from_gray(220),
    );

    if node.collapsed {
        return;
    }

    let origin = node.position;
    let to_screen = |anchor: Pos2| screen_pos + (anchor - origin) * zoom;

    for (i, port) in node.inputs.iter().enumerate() {
        let anchor = to_screen(node.input_anchor(i));
        draw_port(painter, anchor, port.connected, zoom);
        painter.text(
            anchor + Vec2::new(10.0 * zoom, 0.0),
            Align2::LEFT_CENTER,
            port.name,
            FontId::proportional(10.0 * zoom),
            Color32::from_gray(190),
        );
    }
    for (i, port) in node.outputs.iter().enumerate() {
        let anchor = to_screen(node.output_anchor(i));
        draw_port(painter, anchor, port.connected, zoom);
        painter.text(
            anchor - Vec2::new(10.0 * zoom, 0.0),
            Align2::RIGHT_CENTER,
            port.name,
            FontId::proportional(10.0 * zoom),
            Color32::from_gray(190),
        );
    }
}

fn draw_port(painter: &egui::Painter, center: Pos2, connected: bool, zoom: f32) {
    let radius = PORT_RADIUS * zoom;
    if connected {
        painter.circle_filled(center, radius, Color32::from_gray(200));
    } else {
        painter.circle_stroke(center, radius, Stroke::new(1.0 * zoom, Color32::from_gray(140)));
    }
}

impl Pane for PipelineCanvasState {
    fn kind(&self) -> PaneKind {
        PaneKind::PipelineCanvas
    }

    fn render(&mut self, shared: &mut SharedState, ui: &mut Ui) -> Vec<AppAction> {
        render(self, shared, ui)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
