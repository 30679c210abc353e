//! Input plugin - registers action events and the dispatcher.

use bevy::prelude::*;

use super::actions::ActionEvent;
use super::bindings::ActionBindings;
use super::dispatch::dispatch_actions;
use crate::core::ControllerSet;

/// Input plugin - maps devices to named actions each frame.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActionBindings>()
            .add_event::<ActionEvent>()
            .add_systems(Update, dispatch_actions.in_set(ControllerSet::Input));
    }
}
