//! Runtime settings and preferences
//!
//! Persisted as JSON next to the binary. Gameplay balance lives in
//! [`crate::tuning`]; this file only covers how a run is presented and driven.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;
use crate::error::ConfigError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Timing ===
    /// Frame cap (0 = uncapped)
    pub target_fps: u32,

    // === Assets ===
    /// Directory sprite images are loaded from
    pub asset_dir: PathBuf,
    /// Optional tuning file overriding the default game balance
    pub tuning_path: Option<PathBuf>,

    // === Run control ===
    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,
    /// Let the autopilot play
    pub demo: bool,
    /// Stop after this many frames
    pub frame_limit: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: true,
            target_fps: TARGET_FPS,
            asset_dir: PathBuf::from("assets"),
            tuning_path: None,
            seed: None,
            demo: false,
            frame_limit: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::info!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("invaders-settings-{}.json", std::process::id()));
        let settings = Settings {
            show_fps: false,
            seed: Some(42),
            demo: true,
            frame_limit: Some(600),
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let path = std::env::temp_dir().join(format!("invaders-bad-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        let result = Settings::load(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.target_fps, 60);
    }
}
