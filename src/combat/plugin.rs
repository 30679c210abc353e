//! Combat plugin - weapons, firing, and projectiles.

use bevy::prelude::*;

use super::systems;
use super::weapon::DefaultWeapon;

/// Combat plugin - handles all combat systems.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Setup combat systems
        systems::setup_combat_systems(app);
    }
}

/// Create the weapon the player starts with.
pub fn create_starter_weapon() -> DefaultWeapon {
    DefaultWeapon::default()
}
