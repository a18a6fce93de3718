//! Configuration and persisted application state.
//!
//! Two files, both under the platform data directory:
//!
//! - `app_state.json` - UI preferences and the last selected demo,
//!   written on exit.
//! - `config.toml` - optional tuning (window size, canvas grid). Never
//!   written by the app; absent fields fall back to defaults.
//!
//! The pipeline graph itself is not persisted; it is rebuilt from seed
//! data on startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FlowCanvasError, Result, ResultExt};
use crate::graph::DemoGraph;

/// Application identifier for data directories
pub const APP_ID: &str = "dev.flowcanvas.flowcanvas";

/// App state filename
pub const APP_STATE_FILE: &str = "app_state.json";

/// Optional tuning config filename
pub const CONFIG_FILE: &str = "config.toml";

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        FlowCanvasError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            FlowCanvasError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the app state file
pub fn app_state_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(APP_STATE_FILE))
}

/// Get the path to the optional tuning config
pub fn config_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(CONFIG_FILE))
}

// ==================== App State ====================

/// Persistent application state
///
/// Everything here survives restarts; nothing here affects run
/// playback semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    /// Version for future migration support
    #[serde(default = "default_app_state_version")]
    pub version: u32,

    /// Demo pipeline selected when the app last closed
    #[serde(default)]
    pub last_demo: DemoGraph,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,
}

fn default_app_state_version() -> u32 {
    1
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: 1,
            last_demo: DemoGraph::default(),
            ui_preferences: UiPreferences::default(),
        }
    }
}

impl AppState {
    /// Load app state from the default location
    pub fn load() -> Result<Self> {
        let path = app_state_path().ok_or_else(|| {
            FlowCanvasError::Config("Could not determine app state path".to_string())
        })?;
        Self::load_from(&path).context("Failed to load app state")
    }

    /// Load app state from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| FlowCanvasError::Serialization(format!("Invalid app state: {}", e)))
    }

    /// Load app state, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load app state, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save app state to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(&dir.join(APP_STATE_FILE))
    }

    /// Save app state to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            FlowCanvasError::Serialization(format!("Failed to serialize app state: {}", e))
        })?;

        std::fs::write(path, content)
            .map_err(FlowCanvasError::from)
            .context("Failed to write app state")
    }
}

/// UI preferences that persist across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Enable dark mode
    #[serde(default = "default_true")]
    pub dark_mode: bool,

    /// Font scale factor
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,
}

fn default_true() -> bool {
    true
}

fn default_font_scale() -> f32 {
    1.0
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_scale: 1.0,
        }
    }
}

// ==================== App Config ====================

/// Optional tuning read from `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Initial window geometry
    #[serde(default)]
    pub window: WindowConfig,

    /// Canvas appearance
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl AppConfig {
    /// Load from the default location
    pub fn load() -> Result<Self> {
        let path = config_path().ok_or_else(|| {
            FlowCanvasError::Config("Could not determine config path".to_string())
        })?;
        Self::load_from(&path).context("Failed to load config.toml")
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| FlowCanvasError::Serialization(format!("Invalid config: {}", e)))
    }

    /// Load, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }
}

/// Initial window geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Canvas appearance tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Draw the dot grid background
    pub show_grid: bool,

    /// Grid spacing in canvas units
    pub grid_spacing: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            show_grid: true,
            grid_spacing: 24.0,
        }
    }
}

// ==================== Tests ====================
