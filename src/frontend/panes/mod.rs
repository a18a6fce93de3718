//! Pane modules for the workspace
//!
//! Each pane provides a render function that takes its own state, SharedState, and &mut Ui.
//! Panes return Vec<AppAction> instead of mutating state directly.

pub mod code_view;
pub mod model_catalog;
pub mod pipeline_canvas;

pub use code_view::CodeViewState;
pub use model_catalog::ModelCatalogState;
pub use pipeline_canvas::PipelineCanvasState;
