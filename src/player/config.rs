//! Character tuning loaded from an external RON file.
//!
//! Allows tweaking movement and camera parameters without recompilation.

use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

use crate::core::{read_ron, ConfigError};

/// Default location of the character tuning file.
pub const CHARACTER_CONFIG_PATH: &str = "assets/data/player/character.ron";

/// Character tuning, loaded from assets/data/player/character.ron.
///
/// Every field is optional in the file; missing ones keep their default.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    /// Mass of the character body in kg
    pub mass: f32,
    /// Higher air resistance makes the character float when falling
    pub air_resistance: f32,
    /// Camera height above the character origin
    pub eye_height: f32,
    /// Walking speed in units per second
    pub move_speed: f32,
    /// Speed while sprint is held
    pub run_speed: f32,
    /// Upward velocity applied on jump
    pub jump_height: f32,
    /// Radians of yaw per unit of look input
    pub rotation_speed_yaw: f32,
    /// Radians of pitch per unit of look input
    pub rotation_speed_pitch: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
    /// Normal camera field of view in degrees
    pub camera_fov: f32,
    /// Camera field of view in degrees while zoomed
    pub zoom_camera_fov: f32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            mass: 90.0,
            air_resistance: 0.0,
            eye_height: 0.935,
            move_speed: 30.0,
            run_speed: 50.0,
            jump_height: 4.0,
            rotation_speed_yaw: 0.002,
            rotation_speed_pitch: 0.002,
            min_pitch: -1.4,
            max_pitch: 1.5,
            camera_fov: 70.0,
            zoom_camera_fov: 45.0,
        }
    }
}

impl CharacterConfig {
    /// Load the config from a RON file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        read_ron(path)
    }

    /// Load the config from the default path, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from(Path::new(CHARACTER_CONFIG_PATH)) {
            Ok(config) => {
                info!("Loaded character config from {}", CHARACTER_CONFIG_PATH);
                config
            }
            Err(ConfigError::FileNotFound(path)) => {
                warn!("Could not find {}. Using defaults.", path);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }
}

/// System to load the character config at startup.
pub fn load_character_config(mut commands: Commands) {
    let config = CharacterConfig::load();
    commands.insert_resource(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: CharacterConfig = ron::from_str("(mass: 75.0, run_speed: 12.0)").unwrap();

        assert_eq!(config.mass, 75.0);
        assert_eq!(config.run_speed, 12.0);
        assert_eq!(config.eye_height, CharacterConfig::default().eye_height);
        assert_eq!(config.max_pitch, 1.5);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = CharacterConfig::load_from(Path::new("assets/data/player/does_not_exist.ron"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
