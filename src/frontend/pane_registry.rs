//! Pane registry — data-driven pane registration.
//!
//! The registry is the single source of truth for all pane kinds:
//! display names, singleton flags, and factory functions.
//! The View menu and workspace pane creation are driven from this data.

use crate::frontend::pane_trait::Pane;
use crate::frontend::panes::{CodeViewState, ModelCatalogState, PipelineCanvasState};
use crate::frontend::workspace::PaneKind;

/// Metadata for a pane kind, including its factory function.
pub struct PaneKindInfo {
    pub kind: PaneKind,
    pub display_name: &'static str,
    pub is_singleton: bool,
    pub factory: fn() -> Box<dyn Pane>,
}

/// Build the pane registry with all known pane kinds.
pub fn build_registry() -> Vec<PaneKindInfo> {
    vec![
        PaneKindInfo {
            kind: PaneKind::PipelineCanvas,
            display_name: "Pipeline Canvas",
            is_singleton: true,
            factory: || Box::new(PipelineCanvasState::default()),
        },
        PaneKindInfo {
            kind: PaneKind::CodeView,
            display_name: "Code",
            is_singleton: true,
            factory: || Box::new(CodeViewState::default()),
        },
        PaneKindInfo {
            kind: PaneKind::ModelCatalog,
            display_name: "Model Catalog",
            is_singleton: true,
            factory: || Box::new(ModelCatalogState::default()),
        },
    ]
}
