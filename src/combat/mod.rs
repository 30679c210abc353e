//! Combat module - weapons, projectile spawning, and the projectile lifecycle.

mod plugin;
mod projectile;
mod registry;
mod systems;
mod weapon;

pub use plugin::{create_starter_weapon, CombatPlugin};
pub use projectile::{
    Projectile, ProjectileCommands, ProjectilePhase, MAX_PROJECTILE_LIFETIME,
};
pub use registry::{WeaponRegistry, WEAPONS_DIR};
pub use weapon::*;
