//! Action dispatcher - turns raw device state into `ActionEvent`s.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use super::actions::{ActionEvent, InputAction};
use super::bindings::ActionBindings;

/// Read keyboard, mouse and the first gamepad, and emit action events.
///
/// Digital bindings emit `Pressed`/`Released` on edges. Mouse motion emits
/// one `Changed` per motion event and axis. The left stick emits `Changed`
/// when its reading moves; the right stick emits a look delta every frame it
/// is deflected.
pub fn dispatch_actions(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    gamepads: Query<&Gamepad>,
    bindings: Res<ActionBindings>,
    mut last_move_stick: Local<Vec2>,
    mut actions: EventWriter<ActionEvent>,
) {
    for (key, action) in &bindings.keys {
        if keyboard.just_pressed(*key) {
            actions.send(ActionEvent::pressed(*action));
        }
        if keyboard.just_released(*key) {
            actions.send(ActionEvent::released(*action));
        }
    }

    for (button, action) in &bindings.mouse_buttons {
        if mouse_buttons.just_pressed(*button) {
            actions.send(ActionEvent::pressed(*action));
        }
        if mouse_buttons.just_released(*button) {
            actions.send(ActionEvent::released(*action));
        }
    }

    for motion in mouse_motion.read() {
        if motion.delta.x != 0.0 {
            actions.send(ActionEvent::changed(InputAction::MouseRotateYaw, motion.delta.x));
        }
        if motion.delta.y != 0.0 {
            actions.send(ActionEvent::changed(InputAction::MouseRotatePitch, motion.delta.y));
        }
    }

    let Some(gamepad) = gamepads.iter().next() else {
        return;
    };

    let move_stick = bindings.apply_deadzone(gamepad.left_stick());
    if move_stick.x != last_move_stick.x {
        actions.send(ActionEvent::changed(InputAction::StickMoveX, move_stick.x));
    }
    if move_stick.y != last_move_stick.y {
        actions.send(ActionEvent::changed(InputAction::StickMoveY, move_stick.y));
    }
    *last_move_stick = move_stick;

    // Stick up looks up, which is negative in mouse (screen) space
    let look_stick = bindings.apply_deadzone(gamepad.right_stick()) * bindings.stick_look_scale;
    if look_stick.x != 0.0 {
        actions.send(ActionEvent::changed(InputAction::StickLookX, look_stick.x));
    }
    if look_stick.y != 0.0 {
        actions.send(ActionEvent::changed(InputAction::StickLookY, -look_stick.y));
    }
}
