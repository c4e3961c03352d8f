//! Window and gameplay settings
//!
//! Everything has a default, so the game runs with no settings file at all.
//! When `square_dodge.json` exists in the working directory it overrides
//! whichever fields it names.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    /// Window title
    pub title: String,
    /// Inner width in logical pixels
    pub width: u32,
    /// Inner height in logical pixels
    pub height: u32,

    // === Display ===
    /// Frames per second the loop paces to
    pub target_fps: u32,
    /// Wait for vertical blank when presenting
    pub vsync: bool,
    /// Background color (RGBA)
    pub clear_color: [f32; 4],

    // === Gameplay ===
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,

            target_fps: TARGET_FPS,
            vsync: true,
            clear_color: CLEAR_COLOR,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Settings file looked up by `load`
    pub const FILE_NAME: &'static str = "square_dodge.json";

    /// Parse settings from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Load settings from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Error::SettingsRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings = Self::from_json(&json).map_err(|source| Error::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from `FILE_NAME` in the working directory
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    /// Window size never collapses to zero, tuning stays positive
    fn sanitized(mut self) -> Self {
        self.width = self.width.max(1);
        self.height = self.height.max(1);
        self.tuning = self.tuning.sanitized();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_window() {
        let settings = Settings::default();
        assert_eq!(settings.title, "Simple Game");
        assert_eq!((settings.width, settings.height), (800, 600));
        assert_eq!(settings.target_fps, 60);
        assert_eq!(settings.clear_color, [0.2, 0.3, 0.3, 1.0]);
        assert_eq!(settings.tuning, Tuning::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "width": 1024, "tuning": { "spawn_interval": 2.5 } }"#)
                .unwrap();
        assert_eq!(settings.width, 1024);
        assert_eq!(settings.height, WINDOW_HEIGHT);
        assert_eq!(settings.tuning.spawn_interval, 2.5);
        assert_eq!(settings.tuning.player_speed, PLAYER_SPEED);
    }

    #[test]
    fn test_zero_sizes_are_bumped() {
        let settings = Settings::from_json(r#"{ "width": 0, "height": 0 }"#).unwrap();
        assert_eq!((settings.width, settings.height), (1, 1));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ width: ").is_err());
        assert!(Settings::from_json(r#"{ "width": "wide" }"#).is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("square-dodge-settings-that-does-not-exist.json");
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "square-dodge-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "title": "Dodge", "vsync": false }"#).unwrap();
        let settings = Settings::load_from(&path);
        std::fs::remove_file(&path).unwrap();

        let settings = settings.unwrap();
        assert_eq!(settings.title, "Dodge");
        assert!(!settings.vsync);
        assert_eq!(settings.width, WINDOW_WIDTH);
    }

    #[test]
    fn test_bad_file_reports_path() {
        let path = std::env::temp_dir().join(format!(
            "square-dodge-bad-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "not json").unwrap();
        let result = Settings::load_from(&path);
        std::fs::remove_file(&path).unwrap();

        match result {
            Err(Error::SettingsParse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
