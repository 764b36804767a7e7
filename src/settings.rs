//! Game settings
//!
//! Loaded from a JSON file at startup. Every field is optional in the file;
//! missing ones take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FPS, OBSTACLE_STEP, PLAYER_SPEED};
use crate::error::{GameError, Result};
use crate::platform::KeyBindings;
use crate::sim::JumpProfile;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame limiter cap
    pub max_fps: u32,
    /// Player horizontal speed (pixels per millisecond)
    pub player_speed: f32,
    /// Obstacle scroll per frame (pixels)
    pub obstacle_step: f32,
    pub key_bindings: KeyBindings,
    /// Jump profiles the player cycles through, in order
    pub jump_profiles: Vec<JumpProfile>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_fps: MAX_FPS,
            player_speed: PLAYER_SPEED,
            obstacle_step: OBSTACLE_STEP,
            key_bindings: KeyBindings::default(),
            jump_profiles: JumpProfile::defaults(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the game cannot run with.
    ///
    /// An empty profile list is fine (the player simply cannot jump), but a
    /// profile that allows zero jumps is a typo.
    pub fn validate(&self) -> Result<()> {
        if self.max_fps == 0 {
            return Err(GameError::InvalidSettings("max_fps must be at least 1".into()));
        }
        if !self.player_speed.is_finite() || self.player_speed < 0.0 {
            return Err(GameError::InvalidSettings(format!(
                "player_speed must be a non-negative number, got {}",
                self.player_speed
            )));
        }
        if !self.obstacle_step.is_finite() || self.obstacle_step <= 0.0 {
            return Err(GameError::InvalidSettings(format!(
                "obstacle_step must be positive, got {}",
                self.obstacle_step
            )));
        }
        for profile in &self.jump_profiles {
            if profile.max_jumps == 0 {
                return Err(GameError::InvalidSettings(format!(
                    "jump profile '{}' must allow at least one jump",
                    profile.name
                )));
            }
            if !profile.jump_height.is_finite() || !profile.multi_jump_tempo.is_finite() {
                return Err(GameError::InvalidSettings(format!(
                    "jump profile '{}' has a non-finite constant",
                    profile.name
                )));
            }
        }
        if self.jump_profiles.is_empty() {
            log::warn!("No jump profiles configured; the player will not be able to jump");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Key;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "max_fps": 30 }"#).unwrap();
        assert_eq!(settings.max_fps, 30);
        assert_eq!(settings.player_speed, PLAYER_SPEED);
        assert_eq!(settings.jump_profiles, JumpProfile::defaults());
        assert_eq!(settings.key_bindings, KeyBindings::default());
    }

    #[test]
    fn test_custom_bindings_and_profiles() {
        let json = r#"{
            "key_bindings": { "jump": "Space" },
            "jump_profiles": [
                { "name": "Moon", "max_jumps": 3, "jump_height": 12.0, "multi_jump_tempo": 2.0 }
            ]
        }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.key_bindings.jump, Key::Space);
        assert_eq!(settings.key_bindings.move_left, Key::Char('a'));
        assert_eq!(settings.jump_profiles.len(), 1);
        assert_eq!(settings.jump_profiles[0].name, "Moon");
    }

    #[test]
    fn test_zero_max_jumps_rejected() {
        let json = r#"{
            "jump_profiles": [
                { "name": "Broken", "max_jumps": 0, "jump_height": 12.0, "multi_jump_tempo": 0.0 }
            ]
        }"#;
        assert!(matches!(
            Settings::from_json(json),
            Err(GameError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_zero_fps_rejected() {
        assert!(matches!(
            Settings::from_json(r#"{ "max_fps": 0 }"#),
            Err(GameError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(GameError::SettingsParse(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings::default();
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Settings::load(Path::new("/nonexistent/sup-runner/settings.json"));
        assert!(matches!(result, Err(GameError::Io(_))));
    }
}
