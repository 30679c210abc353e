//! Player-related components.

use bevy::prelude::*;

use super::body::{CharacterBody, LivingParams};
use super::config::CharacterConfig;
use crate::core::Tunable;
use crate::input::{ActionEvent, InputAction, InputState};

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Where the next projectile spawns and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimCache {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for AimCache {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Digital movement directions, in character-local axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Back,
    Right,
    Left,
}

impl MoveDirection {
    /// Signed unit value this direction writes to its axis.
    fn sign(self) -> f32 {
        match self {
            MoveDirection::Forward | MoveDirection::Right => 1.0,
            MoveDirection::Back | MoveDirection::Left => -1.0,
        }
    }

    fn axis(self, movement: &mut Vec2) -> &mut f32 {
        match self {
            MoveDirection::Forward | MoveDirection::Back => &mut movement.y,
            MoveDirection::Right | MoveDirection::Left => &mut movement.x,
        }
    }
}

/// Character state driven by input and consumed once per frame.
///
/// Movement intent is x = right, y = forward, combined from digital keys and
/// the analog stick, which are tracked apart. The rotation delta and the
/// fire trigger are transient: they are drained by `take_rotation_delta`
/// and `take_fire_request`.
#[derive(Component, Debug, Clone)]
pub struct CharacterController {
    config: CharacterConfig,
    movement: Vec2,
    stick_movement: Vec2,
    rotation_delta: Vec2,
    pub sprint: bool,
    pub jump: bool,
    pub zoomed: bool,
    fire_requested: bool,
    /// Result of the latest aim resolve
    pub aim: AimCache,
}

impl CharacterController {
    pub fn new(config: CharacterConfig) -> Self {
        Self {
            config,
            movement: Vec2::ZERO,
            stick_movement: Vec2::ZERO,
            rotation_delta: Vec2::ZERO,
            sprint: false,
            jump: false,
            zoomed: false,
            fire_requested: false,
            aim: AimCache::default(),
        }
    }

    pub fn config(&self) -> &CharacterConfig {
        &self.config
    }

    /// Key and stick intent summed, each axis within [-1, 1].
    pub fn movement(&self) -> Vec2 {
        (self.movement + self.stick_movement).clamp(Vec2::NEG_ONE, Vec2::ONE)
    }

    pub fn rotation_delta(&self) -> Vec2 {
        self.rotation_delta
    }

    /// Pressing a direction sets its axis to the direction's sign.
    pub fn press(&mut self, direction: MoveDirection) {
        *direction.axis(&mut self.movement) = direction.sign();
    }

    /// Releasing only clears the axis if it still points the released way,
    /// so an opposing key that is still held keeps working.
    pub fn release(&mut self, direction: MoveDirection) {
        let axis = direction.axis(&mut self.movement);
        if *axis * direction.sign() > 0.0 {
            *axis = 0.0;
        }
    }

    pub fn add_rotation(&mut self, delta: Vec2) {
        self.rotation_delta += delta;
    }

    /// Drain the accumulated rotation delta.
    pub fn take_rotation_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.rotation_delta)
    }

    pub fn request_fire(&mut self) {
        self.fire_requested = true;
    }

    /// Drain the pending fire trigger.
    pub fn take_fire_request(&mut self) -> bool {
        std::mem::take(&mut self.fire_requested)
    }

    /// Field of view the camera should currently use, in degrees.
    pub fn desired_fov(&self) -> f32 {
        if self.zoomed {
            self.config.zoom_camera_fov
        } else {
            self.config.camera_fov
        }
    }

    /// Apply one action event. States an action does not care about are ignored.
    pub fn handle_action(&mut self, event: &ActionEvent) {
        use InputAction::*;

        match (event.action, event.state) {
            (MoveForward, state) => self.handle_direction(MoveDirection::Forward, state),
            (MoveBack, state) => self.handle_direction(MoveDirection::Back, state),
            (MoveRight, state) => self.handle_direction(MoveDirection::Right, state),
            (MoveLeft, state) => self.handle_direction(MoveDirection::Left, state),
            (Sprint, InputState::Pressed) => self.sprint = true,
            (Sprint, InputState::Released) => self.sprint = false,
            (Jump, InputState::Pressed) => self.jump = true,
            (Jump, InputState::Released) => self.jump = false,
            (MouseRotateYaw | StickLookX, InputState::Changed) => {
                self.add_rotation(Vec2::new(event.value, 0.0));
            }
            (MouseRotatePitch | StickLookY, InputState::Changed) => {
                self.add_rotation(Vec2::new(0.0, event.value));
            }
            (StickMoveX, InputState::Changed) => self.stick_movement.x = event.value,
            (StickMoveY, InputState::Changed) => self.stick_movement.y = event.value,
            (Fire, InputState::Pressed) => self.request_fire(),
            (Zoom, InputState::Pressed) => self.zoomed = true,
            (Zoom, InputState::Released) => self.zoomed = false,
            _ => {}
        }
    }

    fn handle_direction(&mut self, direction: MoveDirection, state: InputState) {
        match state {
            InputState::Pressed => self.press(direction),
            InputState::Released => self.release(direction),
            InputState::Changed => {}
        }
    }

    /// Push the full, current physical parameter set to the body.
    pub fn physicalize(&self, body: &mut impl CharacterBody) {
        body.physicalize(&LivingParams::from_config(&self.config));
    }

    pub fn set_mass(&mut self, mass: f32, body: &mut impl CharacterBody) {
        self.config.mass = mass;
        self.physicalize(body);
    }

    pub fn set_air_resistance(&mut self, air_resistance: f32, body: &mut impl CharacterBody) {
        self.config.air_resistance = air_resistance;
        self.physicalize(body);
    }

    pub fn set_eye_height(&mut self, eye_height: f32, body: &mut impl CharacterBody) {
        self.config.eye_height = eye_height;
        self.physicalize(body);
    }

    /// Apply a runtime tunable. Physical ones re-physicalize immediately.
    pub fn apply_tunable(&mut self, tunable: Tunable, body: &mut impl CharacterBody) {
        match tunable {
            Tunable::Mass(value) => self.set_mass(value, body),
            Tunable::AirResistance(value) => self.set_air_resistance(value, body),
            Tunable::EyeHeight(value) => self.set_eye_height(value, body),
            Tunable::MoveSpeed(value) => self.config.move_speed = value,
            Tunable::RunSpeed(value) => self.config.run_speed = value,
            Tunable::JumpHeight(value) => self.config.jump_height = value,
            Tunable::RotationSpeedYaw(value) => self.config.rotation_speed_yaw = value,
            Tunable::RotationSpeedPitch(value) => self.config.rotation_speed_pitch = value,
            Tunable::MinPitch(value) => self.config.min_pitch = value,
            Tunable::MaxPitch(value) => self.config.max_pitch = value,
            Tunable::FieldOfView(value) => self.config.camera_fov = value,
            Tunable::ZoomFieldOfView(value) => self.config.zoom_camera_fov = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::body::test_support::RecordingBody;

    fn controller() -> CharacterController {
        CharacterController::new(CharacterConfig::default())
    }

    #[test]
    fn test_release_keeps_opposing_direction() {
        let mut controller = controller();
        controller.press(MoveDirection::Left);
        controller.press(MoveDirection::Right);
        controller.release(MoveDirection::Left);

        assert_eq!(controller.movement(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_release_clears_matching_direction() {
        let mut controller = controller();
        controller.press(MoveDirection::Forward);
        controller.press(MoveDirection::Right);
        controller.release(MoveDirection::Forward);

        assert_eq!(controller.movement(), Vec2::new(1.0, 0.0));

        controller.release(MoveDirection::Right);
        assert_eq!(controller.movement(), Vec2::ZERO);
    }

    #[test]
    fn test_back_then_forward_release_back() {
        let mut controller = controller();
        controller.handle_action(&ActionEvent::pressed(InputAction::MoveBack));
        controller.handle_action(&ActionEvent::pressed(InputAction::MoveForward));
        controller.handle_action(&ActionEvent::released(InputAction::MoveBack));

        assert_eq!(controller.movement().y, 1.0);
    }

    #[test]
    fn test_rotation_delta_drains_on_take() {
        let mut controller = controller();
        controller.handle_action(&ActionEvent::changed(InputAction::MouseRotateYaw, 4.0));
        controller.handle_action(&ActionEvent::changed(InputAction::MouseRotateYaw, 2.0));
        controller.handle_action(&ActionEvent::changed(InputAction::MouseRotatePitch, -1.0));

        assert_eq!(controller.take_rotation_delta(), Vec2::new(6.0, -1.0));
        assert_eq!(controller.take_rotation_delta(), Vec2::ZERO);
    }

    #[test]
    fn test_unexpected_states_are_ignored() {
        let mut controller = controller();
        controller.handle_action(&ActionEvent::pressed(InputAction::MouseRotateYaw));
        controller.handle_action(&ActionEvent::changed(InputAction::MoveForward, 1.0));
        controller.handle_action(&ActionEvent::released(InputAction::Fire));

        assert_eq!(controller.rotation_delta(), Vec2::ZERO);
        assert_eq!(controller.movement(), Vec2::ZERO);
        assert!(!controller.take_fire_request());
    }

    #[test]
    fn test_fire_request_is_consumed_once() {
        let mut controller = controller();
        controller.handle_action(&ActionEvent::pressed(InputAction::Fire));

        assert!(controller.take_fire_request());
        assert!(!controller.take_fire_request());
    }

    #[test]
    fn test_zoom_switches_fov() {
        let mut controller = controller();
        assert_eq!(controller.desired_fov(), 70.0);

        controller.handle_action(&ActionEvent::pressed(InputAction::Zoom));
        assert_eq!(controller.desired_fov(), 45.0);

        controller.handle_action(&ActionEvent::released(InputAction::Zoom));
        assert_eq!(controller.desired_fov(), 70.0);
    }

    #[test]
    fn test_stick_sets_movement_axes() {
        let mut controller = controller();
        controller.handle_action(&ActionEvent::changed(InputAction::StickMoveX, 0.5));
        controller.handle_action(&ActionEvent::changed(InputAction::StickMoveY, -0.75));

        assert_eq!(controller.movement(), Vec2::new(0.5, -0.75));
    }

    #[test]
    fn test_stick_returning_to_center_keeps_held_key() {
        let mut controller = controller();
        controller.handle_action(&ActionEvent::pressed(InputAction::MoveForward));
        controller.handle_action(&ActionEvent::changed(InputAction::StickMoveY, 0.6));
        controller.handle_action(&ActionEvent::changed(InputAction::StickMoveX, -0.4));

        // Stick falls back into the deadzone while W is still held
        controller.handle_action(&ActionEvent::changed(InputAction::StickMoveY, 0.0));
        controller.handle_action(&ActionEvent::changed(InputAction::StickMoveX, 0.0));

        assert_eq!(controller.movement(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_key_and_stick_combine_within_unit_axes() {
        let mut controller = controller();
        controller.handle_action(&ActionEvent::pressed(InputAction::MoveRight));
        controller.handle_action(&ActionEvent::changed(InputAction::StickMoveX, 0.8));
        controller.handle_action(&ActionEvent::changed(InputAction::StickMoveY, -0.3));

        assert_eq!(controller.movement(), Vec2::new(1.0, -0.3));

        controller.handle_action(&ActionEvent::released(InputAction::MoveRight));
        assert_eq!(controller.movement(), Vec2::new(0.8, -0.3));
    }

    #[test]
    fn test_physical_setters_send_latest_combined_params() {
        let mut controller = controller();
        let mut body = RecordingBody::default();

        controller.set_mass(80.0, &mut body);
        controller.set_air_resistance(0.5, &mut body);
        controller.set_eye_height(1.2, &mut body);

        assert_eq!(body.physicalized.len(), 3);
        let last = body.physicalized[2];
        assert_eq!(last.mass, 80.0);
        assert_eq!(last.air_resistance, 0.5);
        assert!((last.collider_half_height - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_physical_setter_is_idempotent() {
        let mut controller = controller();
        let mut body = RecordingBody::default();

        controller.set_mass(70.0, &mut body);
        controller.set_mass(70.0, &mut body);

        assert_eq!(body.physicalized[0], body.physicalized[1]);
    }

    #[test]
    fn test_non_physical_tunables_do_not_physicalize() {
        let mut controller = controller();
        let mut body = RecordingBody::default();

        controller.apply_tunable(Tunable::RunSpeed(9.0), &mut body);
        controller.apply_tunable(Tunable::MaxPitch(1.0), &mut body);
        controller.apply_tunable(Tunable::Mass(60.0), &mut body);

        assert_eq!(controller.config().run_speed, 9.0);
        assert_eq!(controller.config().max_pitch, 1.0);
        assert_eq!(body.physicalized.len(), 1);
    }
}
