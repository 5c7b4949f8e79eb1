//! Display settings
//!
//! Physics is fixed (see [`crate::consts`]); these only shape the window and
//! overlay. The binary reads them from an optional JSON file next to where it
//! is launched; any field left out keeps its default.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FPS, WINDOW_TITLE};

/// Window and overlay preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Logical window width
    pub width: u32,
    /// Logical window height
    pub height: u32,
    /// Window caption
    pub title: String,
    /// Frame pacing target; 0 disables the limiter
    pub target_fps: u32,
    /// Show an FPS line under the velocity overlay
    pub show_fps: bool,
    /// Sync presentation to the display instead of relying on the frame limiter alone
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            title: WINDOW_TITLE.to_string(),
            target_fps: TARGET_FPS,
            show_fps: false,
            vsync: false,
        }
    }
}

impl Settings {
    /// Settings file looked up in the working directory
    pub const FILE_NAME: &'static str = "hex-bounce.json";

    /// Load settings from `path`, falling back to defaults
    ///
    /// A missing file is normal. An unreadable or malformed one is logged and
    /// ignored.
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                return Self::default();
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}
