//! Desktop and window configuration records.
//!
//! Every field is optional in the on-disk TOML; missing fields fall back to
//! defaults thanks to `#[serde(default)]`. Out-of-range sizes are clamped at
//! window creation, never rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WINDOW_MIN_SIZE, DEFAULT_WINDOW_SIZE};
use crate::error::Error;

/// Configuration for a single window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Symbolic icon identifier; backends map it to a glyph or asset.
    pub icon: String,
    /// Initial position, container-local surface units.
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
    /// Opaque application content hosted inside the window.
    pub content: String,
    pub is_resizable: bool,
    pub is_draggable: bool,
    pub is_maximizable: bool,
    pub has_controls: bool,
    pub has_toolbar_info: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "New Window".to_string(),
            icon: "window".to_string(),
            x: 0,
            y: 0,
            width: DEFAULT_WINDOW_SIZE,
            height: DEFAULT_WINDOW_SIZE,
            min_width: DEFAULT_WINDOW_MIN_SIZE,
            min_height: DEFAULT_WINDOW_MIN_SIZE,
            content: String::new(),
            is_resizable: true,
            is_draggable: true,
            is_maximizable: true,
            has_controls: true,
            has_toolbar_info: true,
        }
    }
}

/// Top-level desktop configuration: a status bar toggle plus the list of
/// windows to open at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub status_bar: StatusBarConfig,
    #[serde(rename = "window")]
    pub windows: Vec<WindowConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBarConfig {
    pub enabled: bool,
    pub left: String,
    pub right: String,
}

impl Default for StatusBarConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            left: "Desktop Environment".to_string(),
            right: "Ready".to_string(),
        }
    }
}

/// Loads and parses a desktop configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<DesktopConfig, Error> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
