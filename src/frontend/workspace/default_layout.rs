//! Default workspace layout
//!
//! Builds the initial dock layout with the pipeline canvas as the main
//! surface and the model catalog + code view docked on the right.

use egui_dock::{DockState, NodeIndex};

use super::{PaneKind, Workspace};

/// Build the default dock layout and return the DockState.
///
/// Layout:
/// ```text
/// ┌────────────────────────────────┬──────────────┐
/// │                                │    Model     │
/// │        Pipeline Canvas         │   Catalog    │
/// │                                ├──────────────┤
/// │                                │    Code      │
/// └────────────────────────────────┴──────────────┘
/// ```
pub fn build_default_layout(workspace: &mut Workspace) -> DockState<super::PaneId> {
    let canvas_id = workspace.register_pane(PaneKind::PipelineCanvas, "Pipeline Canvas");
    let catalog_id = workspace.register_pane(PaneKind::ModelCatalog, "Model Catalog");
    let code_id = workspace.register_pane(PaneKind::CodeView, "Code");

    let mut dock = DockState::new(vec![canvas_id]);

    // Split right 25% for the catalog
    let [_center, right] = dock
        .main_surface_mut()
        .split_right(NodeIndex::root(), 0.75, vec![catalog_id]);

    // Split right panel vertically: top = catalog, bottom = code view
    dock.main_surface_mut()
        .split_below(right, 0.5, vec![code_id]);

    dock
}
