//! Frontend module for egui UI
//!
//! The frontend uses an egui_dock workspace where every UI element is a
//! pane: pipeline canvas, code view, model catalog. Panes can be
//! rearranged via drag-and-drop docking.
//!
//! # Main Types
//!
//! - [`FlowCanvasApp`] - Main application state implementing [`eframe::App`]
//! - [`Workspace`] - Dock state and pane management
//!
//! # Submodules
//!
//! - `workspace` - Dock workspace, tab viewer, default layout
//! - `panes` - Individual pane render functions

pub mod pane_registry;
pub mod pane_trait;
pub mod panes;
pub mod state;
pub mod workspace;

pub use state::{AppAction, SharedState};

use egui::Color32;

use workspace::tab_viewer::WorkspaceTabViewer;
use workspace::{PaneKind, Workspace};

use crate::config::{AppConfig, AppState};
use crate::graph::GraphModel;
use crate::sequencer::{RunScript, RunSequencer, RunState};

/// Main application state for the pipeline canvas
pub struct FlowCanvasApp {
    // === Shared State ===
    graph: GraphModel,
    sequencer: RunSequencer,
    config: AppConfig,
    app_state: AppState,
    last_error: Option<String>,

    // === Workspace ===
    workspace: Workspace,
}

impl FlowCanvasApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, app_state: AppState) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.text_styles.iter_mut().for_each(|(_, font_id)| {
            font_id.size *= app_state.ui_preferences.font_scale;
        });
        cc.egui_ctx.set_style(style);

        let mut last_error = None;
        let (graph, script) = match app_state.last_demo.build() {
            Ok(built) => built,
            Err(e) => {
                tracing::error!("Failed to build seed graph: {}", e);
                last_error = Some(format!("Failed to build seed graph: {}", e));
                (GraphModel::new(), RunScript::new(vec![]))
            }
        };

        // Build workspace with default layout
        let mut workspace = Workspace::new();
        let dock_state = workspace::default_layout::build_default_layout(&mut workspace);
        workspace.dock_state = dock_state;

        Self {
            graph,
            sequencer: RunSequencer::new(script),
            config,
            app_state,
            last_error,
            workspace,
        }
    }

    fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::StartRun => {
                self.sequencer.start();
            }
            AppAction::LoadDemo(demo) => match demo.build() {
                Ok((graph, script)) => {
                    self.graph = graph;
                    self.sequencer.set_script(script);
                    self.app_state.last_demo = demo;
                    tracing::info!("Loaded demo pipeline: {}", demo.display_name());
                }
                Err(e) => {
                    tracing::error!("Failed to load demo pipeline: {}", e);
                    self.last_error = Some(format!("Failed to load demo: {}", e));
                }
            },
            AppAction::OpenPane(kind) => self.open_pane(kind),
            AppAction::ClosePane(id) => self.workspace.remove_pane(id),
        }
    }

    /// Focus an existing singleton pane, or create it in the focused leaf.
    fn open_pane(&mut self, kind: PaneKind) {
        if self.workspace.is_singleton(kind) {
            if let Some(id) = self.workspace.find_singleton(kind) {
                if let Some(location) = self.workspace.dock_state.find_tab(&id) {
                    self.workspace.dock_state.set_active_tab(location);
                }
                return;
            }
        }
        let title = self.workspace.display_name(kind).to_string();
        let id = self.workspace.register_pane(kind, title);
        self.workspace.dock_state.push_to_focused_leaf(id);
    }
}

impl eframe::App for FlowCanvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Advance run playback; while running, keep painting so the
        // progress animation stays smooth.
        self.sequencer.tick();
        if self.sequencer.state() == RunState::Running {
            ctx.request_repaint();
        }

        // Menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        ui.close();
                    }
                });

                ui.menu_button("View", |ui| {
                    let mut dark_mode = self.app_state.ui_preferences.dark_mode;
                    if ui.checkbox(&mut dark_mode, "Dark mode").changed() {
                        self.app_state.ui_preferences.dark_mode = dark_mode;
                        ctx.set_visuals(if dark_mode {
                            egui::Visuals::dark()
                        } else {
                            egui::Visuals::light()
                        });
                    }
                    ui.separator();

                    // Panes — auto-generated from registry
                    let panes: Vec<_> = self
                        .workspace
                        .registry_panes()
                        .map(|info| (info.kind, info.display_name))
                        .collect();
                    for (kind, name) in panes {
                        if ui.button(name).clicked() {
                            self.handle_action(AppAction::OpenPane(kind));
                            ui.close();
                        }
                    }
                });

                // Right-aligned: run status
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match self.sequencer.state() {
                        RunState::Running => {
                            ui.colored_label(Color32::from_rgb(80, 200, 120), "Running")
                        }
                        RunState::Idle => ui.colored_label(Color32::GRAY, "Idle"),
                    };
                });
            });
        });

        // Dock workspace
        {
            let mut viewer = WorkspaceTabViewer {
                graph: &mut self.graph,
                sequencer: &self.sequencer,
                config: &self.config,
                app_state: &mut self.app_state,
                last_error: &mut self.last_error,
                pane_states: &mut self.workspace.pane_states,
                pane_entries: &self.workspace.pane_entries,
                actions: Vec::new(),
            };

            egui_dock::DockArea::new(&mut self.workspace.dock_state)
                .style(egui_dock::Style::from_egui(ctx.style().as_ref()))
                .show(ctx, &mut viewer);

            let actions = viewer.actions;
            for action in actions {
                self.handle_action(action);
            }
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.app_state.save() {
            tracing::warn!("Failed to save app state: {}", e);
        }
    }
}
