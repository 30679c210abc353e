//! Default mapping from physical inputs to actions.

use bevy::prelude::*;

use super::actions::InputAction;

/// Which keys and buttons trigger which actions.
#[derive(Resource, Debug, Clone)]
pub struct ActionBindings {
    pub keys: Vec<(KeyCode, InputAction)>,
    pub mouse_buttons: Vec<(MouseButton, InputAction)>,
    /// Multiplier turning a right-stick reading into look delta units
    pub stick_look_scale: f32,
    /// Stick readings below this magnitude count as zero
    pub stick_deadzone: f32,
}

impl Default for ActionBindings {
    fn default() -> Self {
        Self {
            keys: vec![
                (KeyCode::KeyW, InputAction::MoveForward),
                (KeyCode::KeyS, InputAction::MoveBack),
                (KeyCode::KeyD, InputAction::MoveRight),
                (KeyCode::KeyA, InputAction::MoveLeft),
                (KeyCode::ShiftLeft, InputAction::Sprint),
                (KeyCode::Space, InputAction::Jump),
            ],
            mouse_buttons: vec![
                (MouseButton::Left, InputAction::Fire),
                (MouseButton::Right, InputAction::Zoom),
            ],
            stick_look_scale: 20.0,
            stick_deadzone: 0.1,
        }
    }
}

impl ActionBindings {
    /// Zero out stick readings inside the deadzone.
    pub fn apply_deadzone(&self, stick: Vec2) -> Vec2 {
        if stick.length() < self.stick_deadzone {
            Vec2::ZERO
        } else {
            stick
        }
    }
}
