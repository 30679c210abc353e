//! Named input actions and the events the dispatcher emits for them.

use bevy::prelude::*;

/// Every action the character controller listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveForward,
    MoveBack,
    MoveRight,
    MoveLeft,
    Sprint,
    Jump,
    /// Horizontal mouse motion (analog)
    MouseRotateYaw,
    /// Vertical mouse motion (analog)
    MouseRotatePitch,
    /// Left stick, horizontal (analog movement)
    StickMoveX,
    /// Left stick, vertical (analog movement)
    StickMoveY,
    /// Right stick, horizontal (analog look)
    StickLookX,
    /// Right stick, vertical (analog look)
    StickLookY,
    /// Primary fire
    Fire,
    /// Hold to zoom the camera
    Zoom,
}

impl InputAction {
    /// Stable action name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            InputAction::MoveForward => "moveforward",
            InputAction::MoveBack => "moveback",
            InputAction::MoveRight => "moveright",
            InputAction::MoveLeft => "moveleft",
            InputAction::Sprint => "sprint",
            InputAction::Jump => "jump",
            InputAction::MouseRotateYaw => "mouse_rotateyaw",
            InputAction::MouseRotatePitch => "mouse_rotatepitch",
            InputAction::StickMoveX => "stickmovex",
            InputAction::StickMoveY => "stickmovey",
            InputAction::StickLookX => "sticklookx",
            InputAction::StickLookY => "sticklooky",
            InputAction::Fire => "mouse1",
            InputAction::Zoom => "mouse2",
        }
    }
}

/// Transition reported for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    /// Digital input went down this frame
    Pressed,
    /// Digital input went up this frame
    Released,
    /// Analog input moved; the value carries the new reading or delta
    Changed,
}

/// Sent once per bound action per input event.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ActionEvent {
    pub action: InputAction,
    pub state: InputState,
    pub value: f32,
}

impl ActionEvent {
    pub fn pressed(action: InputAction) -> Self {
        Self { action, state: InputState::Pressed, value: 1.0 }
    }

    pub fn released(action: InputAction) -> Self {
        Self { action, state: InputState::Released, value: 0.0 }
    }

    pub fn changed(action: InputAction, value: f32) -> Self {
        Self { action, state: InputState::Changed, value }
    }
}
