//! Third-person locomotion: input intent becomes body movement.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::body::{
    drive_living_bodies, read_ground_contact, rebuild_living_colliders, CharacterBody,
    LivingBody, LivingParams,
};
use super::components::*;
use super::config::{load_character_config, CharacterConfig};
use crate::camera::CameraRig;
use crate::combat::{create_starter_weapon, ActiveWeapon};
use crate::core::{ControllerSet, SetTunable};
use crate::input::ActionEvent;

/// Set up player movement systems.
pub fn setup_movement_systems(app: &mut App) {
    app
        .add_systems(Startup, load_character_config)
        .add_systems(Update, read_ground_contact.in_set(ControllerSet::Input))
        .add_systems(
            Update,
            (apply_actions, apply_tunables).in_set(ControllerSet::Intent),
        )
        .add_systems(Update, integrate_locomotion.in_set(ControllerSet::Locomotion))
        .add_systems(
            Update,
            (rebuild_living_colliders, drive_living_bodies)
                .chain()
                .in_set(ControllerSet::Physics),
        );
}

impl CharacterController {
    /// Integrate one frame of movement against the body.
    ///
    /// The intent is turned into camera space and flattened. A pending jump
    /// fires only from the ground and is then cleared. Mid-air no move
    /// command is issued.
    pub fn integrate(&mut self, dt: f32, camera_rotation: Quat, body: &mut impl CharacterBody) {
        let status = body.status();

        // Intent y is forward, which is -Z in camera space
        let local = Vec3::new(self.movement().x, 0.0, -self.movement().y);
        let mut movement = camera_rotation * local;

        // Camera pitch tilts the vector, keep only the ground plane part
        movement.y = 0.0;
        let movement = movement.normalize_or_zero();

        if self.jump && !status.airborne {
            // Keep the current horizontal velocity while jumping
            body.jump(Vec3::new(
                status.velocity.x,
                self.config().jump_height,
                status.velocity.z,
            ));
            self.jump = false;
        }

        if movement == Vec3::ZERO || status.airborne {
            return;
        }

        let speed = if self.sprint {
            self.config().run_speed
        } else {
            self.config().move_speed
        };

        body.move_by(movement * speed * dt);
    }
}

/// Feed this frame's action events to the player's controller.
pub fn apply_actions(
    mut actions: EventReader<ActionEvent>,
    mut player_query: Query<&mut CharacterController, With<Player>>,
) {
    let Ok(mut controller) = player_query.get_single_mut() else {
        actions.clear();
        return;
    };

    for event in actions.read() {
        controller.handle_action(event);
    }
}

/// Apply runtime tunable changes.
pub fn apply_tunables(
    mut tunables: EventReader<SetTunable>,
    mut player_query: Query<(&mut CharacterController, &mut LivingBody), With<Player>>,
) {
    let Ok((mut controller, mut body)) = player_query.get_single_mut() else {
        tunables.clear();
        return;
    };

    for SetTunable(tunable) in tunables.read() {
        debug!("Applying tunable {:?}", tunable);
        controller.apply_tunable(*tunable, &mut *body);
    }
}

/// Move the player according to its intent, aligned with the camera rig.
pub fn integrate_locomotion(
    time: Res<Time>,
    rig_query: Query<&CameraRig>,
    mut player_query: Query<(&mut CharacterController, &mut LivingBody), With<Player>>,
) {
    let Ok((mut controller, mut body)) = player_query.get_single_mut() else {
        return;
    };

    let camera_rotation = rig_query
        .get_single()
        .map(|rig| rig.rotation())
        .unwrap_or(Quat::IDENTITY);

    controller.integrate(time.delta_secs(), camera_rotation, &mut *body);
}

/// Spawn the player entity with its body, controller and starter weapon.
pub fn spawn_player(commands: &mut Commands, position: Vec3, config: &CharacterConfig) -> Entity {
    let controller = CharacterController::new(config.clone());
    let params = LivingParams::from_config(config);

    commands
        .spawn((
            Name::new("Player"),
            Player,
            controller,
            LivingBody::new(params),
            ActiveWeapon::new(create_starter_weapon()),
            // Transform
            Transform::from_translation(position),
            Visibility::default(),
            // Rapier physics components
            RigidBody::KinematicPositionBased,
            params.collider(),
            ColliderMassProperties::Mass(params.mass),
            KinematicCharacterController {
                offset: params.controller_offset(),
                autostep: Some(CharacterAutostep {
                    max_height: CharacterLength::Absolute(0.4),
                    min_width: CharacterLength::Absolute(0.3),
                    include_dynamic_bodies: false,
                }),
                max_slope_climb_angle: 45_f32.to_radians(),
                min_slope_slide_angle: 30_f32.to_radians(),
                snap_to_ground: Some(CharacterLength::Absolute(0.5)),
                ..default()
            },
        ))
        .id()
}
