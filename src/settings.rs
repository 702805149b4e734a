//! Game settings and preferences
//!
//! Read once at startup from a JSON file. Every field is optional in the
//! file; anything missing takes its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable overriding the settings file location
pub const CONFIG_ENV: &str = "ITRIK_SURFERS_CONFIG";
/// Settings file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "itrik_surfers.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the high score is kept
    pub high_score_path: PathBuf,
    /// Fixed spawn seed (random per launch when unset)
    pub seed: Option<u64>,
    /// Draw the drifting city silhouettes
    pub show_skyline: bool,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            high_score_path: PathBuf::from("highscore.txt"),
            seed: None,
            show_skyline: true,
            show_fps: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load from `path`, falling back to defaults if it is missing or bad
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Bad settings file {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from `$ITRIK_SURFERS_CONFIG` or `./itrik_surfers.json`
    pub fn load() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&path)
    }
}
