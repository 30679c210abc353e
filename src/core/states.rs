//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. The character
//! controller, camera rig and projectiles only run while playing.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` to read config and weapon data
/// - Move to `InGame` when loading completes
/// - Leaving `InGame` tears down the camera rig and the level
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading config and data files
    #[default]
    Loading,
    /// Active gameplay
    InGame,
}

/// Sub-states for gameplay - only active when GameState::InGame.
///
/// Pausing stays inside `InGame`, so the rig and level survive a pause.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum PlayState {
    /// Controller, camera and projectiles are stepped every frame
    #[default]
    Playing,
    /// Frame stepping is suspended, world stays visible
    Paused,
}
