//! Front-end settings and preferences
//!
//! Loaded from an optional JSON file. The spin physics constants are fixed and are not
//! part of these settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_INTERVAL_MS;

/// Terminal front-end preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay between animation frames (milliseconds)
    pub frame_interval_ms: u64,
    /// Fixed RNG seed (random per run when unset)
    pub seed: Option<u64>,
    /// Wheel radius in terminal rows
    pub wheel_radius: u16,

    // === Display ===
    /// Redraw the wheel on every tick while spinning
    pub animate: bool,
    /// 24-bit ANSI colors (plain characters when off)
    pub color: bool,

    // === Input ===
    /// Ask before clearing a non-empty wheel
    pub confirm_clear: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_interval_ms: TICK_INTERVAL_MS,
            seed: None,
            wheel_radius: 10,

            animate: true,
            color: true,

            confirm_clear: true,
        }
    }
}

impl Settings {
    /// Smallest wheel that still fits a pointer, hub and labels
    pub const MIN_WHEEL_RADIUS: u16 = 4;
    pub const MAX_WHEEL_RADIUS: u16 = 40;

    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Invalid settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Clamp values into usable ranges
    fn sanitized(mut self) -> Self {
        self.wheel_radius = self
            .wheel_radius
            .clamp(Self::MIN_WHEEL_RADIUS, Self::MAX_WHEEL_RADIUS);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.frame_interval_ms, 16);
        assert_eq!(settings.seed, None);
        assert!(settings.animate);
        assert!(settings.confirm_clear);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "color": false }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(!settings.color);
        assert_eq!(settings.frame_interval_ms, 16);
        assert_eq!(settings.wheel_radius, 10);
    }

    #[test]
    fn test_radius_is_clamped() {
        let settings = Settings::from_json(r#"{ "wheel_radius": 1 }"#).unwrap();
        assert_eq!(settings.wheel_radius, Settings::MIN_WHEEL_RADIUS);
        let settings = Settings::from_json(r#"{ "wheel_radius": 999 }"#).unwrap();
        assert_eq!(settings.wheel_radius, Settings::MAX_WHEEL_RADIUS);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(7),
            animate: false,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/nonexistent/wheel-settings.json"));
        assert_eq!(settings, Settings::default());
    }
}
