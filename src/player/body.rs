//! Living body - the physics side of the character.
//!
//! The locomotion code talks to a `CharacterBody`; `LivingBody` implements
//! it as plain state, and the systems at the bottom of this file drive a
//! Rapier kinematic character controller from that state.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::config::CharacterConfig;

/// Downward acceleration applied to airborne living bodies.
pub const GRAVITY: f32 = 9.81;

/// Physics status read back from a body.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BodyStatus {
    /// Body has no ground contact
    pub airborne: bool,
    pub velocity: Vec3,
}

/// What the locomotion controller needs from the physics engine.
pub trait CharacterBody {
    fn status(&self) -> BodyStatus;
    /// Request a horizontal displacement for this frame.
    fn move_by(&mut self, motion: Vec3);
    /// Replace the body velocity with a jump velocity.
    fn jump(&mut self, velocity: Vec3);
    /// (Re)create the physical representation from a full parameter set.
    fn physicalize(&mut self, params: &LivingParams);
}

/// Full parameter set for a living (player) body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LivingParams {
    pub mass: f32,
    pub air_resistance: f32,
    pub collider_radius: f32,
    pub collider_half_height: f32,
    /// Skin distance kept between the capsule and the ground
    pub ground_contact_epsilon: f32,
    /// Fraction of move input honored mid-air (zero locks movement)
    pub air_control: f32,
}

impl LivingParams {
    /// Build the parameter set from the current character tuning.
    pub fn from_config(config: &CharacterConfig) -> Self {
        Self {
            mass: config.mass,
            air_resistance: config.air_resistance,
            collider_radius: 0.45,
            collider_half_height: config.eye_height * 0.25,
            ground_contact_epsilon: 0.004,
            air_control: 0.0,
        }
    }

    pub fn collider(&self) -> Collider {
        Collider::capsule_y(self.collider_half_height, self.collider_radius)
    }

    pub fn controller_offset(&self) -> CharacterLength {
        CharacterLength::Absolute(self.ground_contact_epsilon)
    }
}

/// Physical state of the character, owned by the physics stage.
#[derive(Component, Debug, Clone)]
pub struct LivingBody {
    params: LivingParams,
    velocity: Vec3,
    airborne: bool,
    pending_motion: Vec3,
    needs_rebuild: bool,
}

impl LivingBody {
    pub fn new(params: LivingParams) -> Self {
        Self {
            params,
            velocity: Vec3::ZERO,
            airborne: false,
            pending_motion: Vec3::ZERO,
            needs_rebuild: false,
        }
    }

    pub fn params(&self) -> &LivingParams {
        &self.params
    }

    pub fn set_airborne(&mut self, airborne: bool) {
        self.airborne = airborne;
    }

    /// Returns true once after each `physicalize` call.
    pub fn take_rebuild(&mut self) -> bool {
        std::mem::take(&mut self.needs_rebuild)
    }

    /// Advance the body by `dt` and return the translation to hand to the
    /// character controller.
    ///
    /// Grounded bodies move exactly by the requested motion and press lightly
    /// into the ground. Rising or airborne bodies fall under gravity and are
    /// slowed by air resistance.
    pub fn step(&mut self, dt: f32) -> Vec3 {
        let motion = std::mem::take(&mut self.pending_motion);
        if dt <= 0.0 {
            return Vec3::ZERO;
        }

        if self.airborne || self.velocity.y > 0.0 {
            // Mid-air steering blends towards the requested motion
            if motion != Vec3::ZERO {
                let control = self.params.air_control.clamp(0.0, 1.0);
                self.velocity.x += (motion.x / dt - self.velocity.x) * control;
                self.velocity.z += (motion.z / dt - self.velocity.z) * control;
            }
            self.velocity.y -= GRAVITY * dt;
            let drag = (1.0 - self.params.air_resistance * dt).clamp(0.0, 1.0);
            self.velocity *= drag;
        } else {
            self.velocity = Vec3::new(motion.x / dt, -GRAVITY * dt, motion.z / dt);
        }

        self.velocity * dt
    }
}

impl CharacterBody for LivingBody {
    fn status(&self) -> BodyStatus {
        BodyStatus {
            airborne: self.airborne,
            velocity: self.velocity,
        }
    }

    fn move_by(&mut self, motion: Vec3) {
        self.pending_motion += motion;
    }

    fn jump(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn physicalize(&mut self, params: &LivingParams) {
        self.params = *params;
        self.needs_rebuild = true;
    }
}

/// Copy ground contact from last frame's controller output onto the body.
pub fn read_ground_contact(
    mut query: Query<(&mut LivingBody, &KinematicCharacterControllerOutput)>,
) {
    for (mut body, output) in query.iter_mut() {
        let airborne = !output.grounded;
        if body.airborne != airborne {
            body.set_airborne(airborne);
        }
    }
}

/// Rebuild collider, mass and controller skin after a re-physicalization.
pub fn rebuild_living_colliders(
    mut query: Query<(
        Entity,
        &mut LivingBody,
        &mut Collider,
        &mut ColliderMassProperties,
        Option<&mut KinematicCharacterController>,
    )>,
) {
    for (entity, mut body, mut collider, mut mass, controller) in query.iter_mut() {
        if !body.take_rebuild() {
            continue;
        }

        let params = *body.params();
        *collider = params.collider();
        *mass = ColliderMassProperties::Mass(params.mass);
        if let Some(mut controller) = controller {
            controller.offset = params.controller_offset();
        }

        info!(
            "Re-physicalized {:?}: mass {} kg, air resistance {}, capsule half-height {}",
            entity, params.mass, params.air_resistance, params.collider_half_height
        );
    }
}

/// Step every living body and feed the result to its Rapier controller.
pub fn drive_living_bodies(
    time: Res<Time>,
    mut query: Query<(&mut LivingBody, &mut KinematicCharacterController)>,
) {
    let dt = time.delta_secs();

    for (mut body, mut controller) in query.iter_mut() {
        controller.translation = Some(body.step(dt));
    }
}
