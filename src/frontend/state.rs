//! Shared state types for the frontend
//!
//! Panes receive `SharedState` via borrowing and return `AppAction`s
//! instead of mutating app-level state directly.

use crate::config::{AppConfig, AppState};
use crate::graph::{DemoGraph, GraphModel};
use crate::sequencer::RunSequencer;

use super::workspace::{PaneId, PaneKind};

/// Shared state accessible by all panes (borrowed, not owned).
///
/// The graph is read-write: the canvas pane moves and collapses nodes
/// directly. Run playback is read-only; starting a run goes through
/// [`AppAction::StartRun`] so the app owns the sequencer mutably.
pub struct SharedState<'a> {
    /// The pipeline graph
    pub graph: &'a mut GraphModel,

    /// Run playback state (read-only view)
    pub sequencer: &'a RunSequencer,

    /// Tuning config (read-only)
    pub config: &'a AppConfig,

    /// Persistent app state (read-write by panes)
    pub app_state: &'a mut AppState,

    /// Error display
    pub last_error: &'a mut Option<String>,
}

/// Actions that any pane can emit
///
/// Panes return `Vec<AppAction>` instead of mutating state directly,
/// so pane logic stays testable and action handling stays centralized.
#[derive(Debug, Clone)]
pub enum AppAction {
    /// Start (or restart) run playback of the current script
    StartRun,

    /// Replace the graph and script with a seed pipeline
    LoadDemo(DemoGraph),

    /// Open/focus a pane, creating it if it does not exist
    OpenPane(PaneKind),

    /// Close a pane (remove from dock and clean up state)
    ClosePane(PaneId),
}
