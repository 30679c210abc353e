//! Player plugin - input intent, locomotion, and body physics.

use bevy::prelude::*;

use super::movement;

/// Player plugin - handles the player's controller and body every frame.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        // Set up movement systems
        movement::setup_movement_systems(app);
    }
}
