//! Pivot Shooter - a third-person character controller with aimed projectiles in Bevy.
//!
//! A character walks around a small arena. The camera orbits on a pivot
//! that follows the character, and shots are aimed through the center of
//! the screen: close targets are hit instantly, far ones get a real
//! projectile.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, the controller frame order
//! - **Input**: Devices mapped to named actions
//! - **Player**: Character intent, locomotion, physical body
//! - **Camera**: Pivot rig, screen-center aim, field of view
//! - **Combat**: Weapons, projectile spawning and lifetime
//! - **World**: Arena geometry and materials

pub mod camera;
pub mod combat;
pub mod core;
pub mod input;
pub mod player;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct ShooterPlugin;

impl Plugin for ShooterPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Input systems
            .add_plugins(input::InputPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Camera systems
            .add_plugins(camera::CameraPlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin)

            // World systems
            .add_plugins(world::WorldPlugin);
    }
}
