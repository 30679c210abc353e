//! Camera rig - a pivot that follows the character and owns the view angles.
//!
//! The pivot mirrors the character position every frame. The camera is a
//! separate entity, placed at eye height above the pivot with the pivot's
//! orientation, so the character body never rotates with the view.

use bevy::prelude::*;
use std::f32::consts::TAU;
use thiserror::Error;

use super::aim::ViewProjection;
use crate::player::CharacterConfig;

/// Errors raised while building the rig.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RigError {
    /// The rig was built without a character to follow.
    #[error("Camera rig needs a character to follow")]
    MissingCharacter,
}

/// Marker for the pivot entity.
#[derive(Component)]
pub struct CameraPivot;

/// Marker for the detached player camera entity.
#[derive(Component)]
pub struct PlayerCamera;

/// View state owned by the pivot.
///
/// Invariants after every update: `min_pitch <= pitch <= max_pitch` and
/// `roll == 0.0`.
#[derive(Component, Debug, Clone)]
pub struct CameraRig {
    character: Entity,
    yaw: f32,
    pitch: f32,
    roll: f32,
    pivot_position: Vec3,
    camera_position: Vec3,
    rotation: Quat,
}

impl CameraRig {
    /// Build a rig following `character`, given as entity and position.
    pub fn attach(character: Option<(Entity, Vec3)>, eye_height: f32) -> Result<Self, RigError> {
        let (character, position) = character.ok_or(RigError::MissingCharacter)?;

        Ok(Self {
            character,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            pivot_position: position,
            camera_position: position + Vec3::Y * eye_height,
            rotation: Quat::IDENTITY,
        })
    }

    pub fn character(&self) -> Entity {
        self.character
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn roll(&self) -> f32 {
        self.roll
    }

    pub fn pivot_position(&self) -> Vec3 {
        self.pivot_position
    }

    pub fn camera_position(&self) -> Vec3 {
        self.camera_position
    }

    /// Orientation shared by pivot and camera.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Apply one frame of look input and follow the character.
    ///
    /// The delta is inverted so that pulling right turns the view towards
    /// the right (negative yaw around +Y) and pulling down pitches down.
    /// Returns the new orientation.
    pub fn update_view(
        &mut self,
        rotation_delta: Vec2,
        character_position: Vec3,
        config: &CharacterConfig,
    ) -> Quat {
        self.pivot_position = character_position;

        let delta = -rotation_delta;

        // Wrapped to [0, TAU) so long sessions keep full precision
        self.yaw = (self.yaw + delta.x * config.rotation_speed_yaw).rem_euclid(TAU);

        // max/min instead of clamp: a runtime-set min above max must not panic
        let pitch = self.pitch + delta.y * config.rotation_speed_pitch;
        self.pitch = pitch.max(config.min_pitch).min(config.max_pitch);

        self.roll = 0.0;

        self.rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, self.roll);

        // Pivot sits at the feet, the camera looks from eye height
        self.camera_position = self.pivot_position + Vec3::Y * config.eye_height;

        self.rotation
    }
}

impl ViewProjection for CameraRig {
    fn screen_center_origin(&self) -> Vec3 {
        self.camera_position
    }

    fn screen_center_direction(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    fn transform_direction(&self, direction: Vec3) -> Vec3 {
        self.rotation * direction
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }
}

/// Lifecycle of the rig entities, driven by the game state.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RigLifecycle {
    /// Nothing spawned yet
    #[default]
    Uninitialized,
    /// Pivot, camera and aim marker exist
    Active {
        pivot: Entity,
        camera: Entity,
        marker: Entity,
    },
    /// Entities removed after leaving gameplay
    TornDown,
}

impl RigLifecycle {
    pub fn is_active(&self) -> bool {
        matches!(self, RigLifecycle::Active { .. })
    }

    /// Record freshly spawned rig entities. Returns false if already active.
    pub fn activate(&mut self, pivot: Entity, camera: Entity, marker: Entity) -> bool {
        if self.is_active() {
            return false;
        }
        *self = RigLifecycle::Active { pivot, camera, marker };
        true
    }

    /// Move to `TornDown`, handing back the entities to remove.
    pub fn tear_down(&mut self) -> Option<[Entity; 3]> {
        match *self {
            RigLifecycle::Active { pivot, camera, marker } => {
                *self = RigLifecycle::TornDown;
                Some([pivot, camera, marker])
            }
            _ => None,
        }
    }
}
