use std::path::Path;

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// Window and display settings. Every field is optional in the JSON file:
///
/// ```json
/// { "window_size": [1200.0, 800.0], "image_scale": 3.0, "show_spikes": false }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Screen pixels per stimulus pixel.
    pub image_scale: f32,
    /// Show the spike-response chart for train/val stimuli.
    pub show_spikes: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
            image_scale: 2.0,
            show_spikes: true,
        }
    }
}

impl ViewerConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.window_size)
                .with_min_inner_size(self.min_window_size),
            ..Default::default()
        }
    }
}
