//! Runtime configuration with TOML preset support.
//!
//! All tweakable settings are consolidated here and serialize to/from
//! TOML. The struct uses `#[serde(default)]` so partial files (e.g. only
//! overriding `wheel_scale_step`) work correctly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ArcballError;
use crate::input::trackball::{GESTURE_OVERLAY_MS, WHEEL_SCALE_STEP};

/// Tuning knobs for the trackball and scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArcballOptions {
    /// How long the rotation-gesture overlay stays visible after
    /// pointer-up, in milliseconds.
    pub gesture_overlay_ms: u64,
    /// Uniform scale step applied to the tracked object per wheel tick.
    pub wheel_scale_step: f32,
    /// Auto-spin rate of the tracked object in radians per second.
    pub spin_rate: f32,
}

impl Default for ArcballOptions {
    fn default() -> Self {
        Self {
            gesture_overlay_ms: GESTURE_OVERLAY_MS,
            wheel_scale_step: WHEEL_SCALE_STEP,
            spin_rate: crate::scene::DEFAULT_SPIN_RATE,
        }
    }
}

impl ArcballOptions {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`ArcballError::Io`] when the file cannot be read,
    /// [`ArcballError::OptionsParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, ArcballError> {
        let content = std::fs::read_to_string(path).map_err(ArcballError::Io)?;
        toml::from_str(&content)
            .map_err(|e| ArcballError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`ArcballError::Io`] when the file cannot be written,
    /// [`ArcballError::OptionsParse`] when serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), ArcballError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ArcballError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ArcballError::Io)?;
        }
        std::fs::write(path, content).map_err(ArcballError::Io)
    }
}
