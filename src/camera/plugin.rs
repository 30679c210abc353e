//! Camera plugin - third-person rig, aiming, and zoom.

use bevy::prelude::*;

use super::aim::resolve_player_aim;
use super::rig::RigLifecycle;
use super::systems::*;
use crate::core::{ControllerSet, GameState, PlayState};
use crate::world::setup_arena;

/// Camera plugin - spawns the rig with the level and drives it every frame.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RigLifecycle>()
            // The rig needs the player, which the arena spawns
            .add_systems(
                OnEnter(GameState::InGame),
                spawn_camera_rig.after(setup_arena),
            )
            .add_systems(OnExit(GameState::InGame), teardown_camera_rig)
            .add_systems(OnEnter(PlayState::Playing), grab_cursor)
            .add_systems(OnExit(PlayState::Playing), release_cursor)
            .add_systems(
                Update,
                (update_camera_rig, apply_zoom).in_set(ControllerSet::View),
            )
            .add_systems(Update, resolve_player_aim.in_set(ControllerSet::Aim));
    }
}
