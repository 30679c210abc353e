//! World plugin - materials and the arena.

use bevy::prelude::*;

use crate::core::GameState;

use super::arena::{cleanup_arena, setup_arena};
use super::materials::setup_materials;

/// World plugin - builds the arena when gameplay starts.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_materials)
            .add_systems(OnEnter(GameState::InGame), setup_arena)
            .add_systems(OnExit(GameState::InGame), cleanup_arena);
    }
}
