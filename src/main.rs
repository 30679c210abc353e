//! Pivot Shooter - Entry Point
//!
//! Controls:
//! - WASD / left stick: Move
//! - Mouse / right stick: Look around
//! - Shift: Sprint
//! - Space: Jump
//! - Left mouse: Fire
//! - Right mouse: Zoom
//! - Escape: Pause/Unpause

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Pivot Shooter".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        // Our game plugin
        .add_plugins(pivot_shooter::ShooterPlugin)

        .run();
}
