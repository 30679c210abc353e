//! Core plugin that sets up game states, events, and fundamental systems.

use bevy::prelude::*;

use super::events::*;
use super::sets::ControllerSet;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame) and the Playing/Paused sub-state
/// - Global events (SetTunable, EquipWeapon)
/// - The chained `ControllerSet` frame order
/// - Basic game flow systems
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .add_sub_state::<PlayState>()

            // Register global events
            .add_event::<SetTunable>()
            .add_event::<EquipWeapon>()

            // Controller frame order
            .configure_sets(
                Update,
                (
                    ControllerSet::Input,
                    ControllerSet::Intent,
                    ControllerSet::View,
                    ControllerSet::Aim,
                    ControllerSet::Locomotion,
                    ControllerSet::Fire,
                    ControllerSet::Physics,
                )
                    .chain()
                    .run_if(in_state(PlayState::Playing)),
            )

            // Loading state - data files are read in Startup, so move on at once
            .add_systems(OnEnter(GameState::Loading), transition_to_game)

            // Pause/unpause with Escape key
            .add_systems(
                Update,
                handle_pause_input.run_if(in_state(GameState::InGame))
            );
    }
}

/// Immediately transition from Loading to InGame.
fn transition_to_game(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<PlayState>>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            PlayState::Playing => next_state.set(PlayState::Paused),
            PlayState::Paused => next_state.set(PlayState::Playing),
        }
    }
}
