//! FlowCanvas - Main Entry Point
//!
//! Desktop demo of a visual AI pipeline builder with scripted run
//! playback.

use flowcanvas::{
    config::{AppConfig, AppState},
    frontend::FlowCanvasApp,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,flowcanvas=trace")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FlowCanvas");

    let app_state = AppState::load_or_default();
    let config = AppConfig::load_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([800.0, 600.0])
            .with_title("FlowCanvas"),
        ..Default::default()
    };

    eframe::run_native(
        "FlowCanvas",
        native_options,
        Box::new(|cc| {
            let mut style = (*cc.egui_ctx.style()).clone();
            style.visuals = if app_state.ui_preferences.dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            };
            style.visuals.window_shadow.offset = [0, 0];
            cc.egui_ctx.set_style(style);

            Ok(Box::new(FlowCanvasApp::new(cc, config, app_state)))
        }),
    )
}
