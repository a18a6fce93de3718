//! # FlowCanvas: Interactive AI Pipeline Canvas
//!
//! A desktop demo of a visual AI pipeline builder: typed nodes on a
//! pannable, zoomable canvas, connected by bezier edges, with a
//! scripted "run" animation that walks the pipeline on a timed
//! schedule. Runs are playback, not execution; no model is ever called.
//!
//! ## Architecture
//!
//! - **Graph**: authoritative node/edge model with viewport-clamped
//!   positions and cached edge paths
//! - **Sequencer**: polled state machine replaying authored run
//!   scripts against a pluggable clock
//! - **Canvas**: pure pan/zoom/drag transform math
//! - **Frontend**: eframe/egui UI with an egui_dock workspace
//!
//! ## Configuration
//!
//! Application state (preferences, last demo) is stored in the
//! platform-appropriate data directory under `dev.flowcanvas.flowcanvas`:
//!
//! - **Linux**: `~/.local/share/dev.flowcanvas.flowcanvas/`
//! - **macOS**: `~/Library/Application Support/dev.flowcanvas.flowcanvas/`
//! - **Windows**: `%APPDATA%\dev.flowcanvas.flowcanvas\`

pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod frontend;
pub mod graph;
pub mod sequencer;

// Re-export commonly used types
pub use app::FlowCanvasApp;
pub use canvas::CanvasState;
pub use config::{AppConfig, AppState};
pub use error::{FlowCanvasError, Result};
pub use graph::{DemoGraph, GraphModel, Node, NodeId};
pub use sequencer::{RunScript, RunSequencer, RunState, RunStep};
