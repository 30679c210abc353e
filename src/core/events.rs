//! Global events used for cross-system communication.
//!
//! These let tools, consoles or other plugins reach into the character
//! controller without holding its components directly.

use bevy::prelude::*;

/// A single runtime-settable character tunable with its new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tunable {
    /// Body mass in kg (re-physicalizes)
    Mass(f32),
    /// Air resistance (re-physicalizes)
    AirResistance(f32),
    /// Eye height above the character origin (re-physicalizes)
    EyeHeight(f32),
    MoveSpeed(f32),
    RunSpeed(f32),
    JumpHeight(f32),
    RotationSpeedYaw(f32),
    RotationSpeedPitch(f32),
    MinPitch(f32),
    MaxPitch(f32),
    /// Normal camera field of view in degrees
    FieldOfView(f32),
    /// Camera field of view in degrees while zoomed
    ZoomFieldOfView(f32),
}

/// Sent to change a character tunable at runtime.
///
/// Takes effect on the next relevant update; physical tunables
/// re-physicalize the body as soon as the event is handled.
#[derive(Event, Debug, Clone, Copy)]
pub struct SetTunable(pub Tunable);

/// Sent to replace the player's active weapon with a registered one.
#[derive(Event, Debug, Clone)]
pub struct EquipWeapon {
    /// Weapon name from its RON definition, or `DefaultWeapon`
    pub name: String,
}
