//! Player module - character state, locomotion, and the living body.

mod body;
mod components;
mod config;
mod movement;
mod plugin;

pub use body::{BodyStatus, CharacterBody, LivingBody, LivingParams, GRAVITY};
pub use components::*;
pub use config::{CharacterConfig, CHARACTER_CONFIG_PATH};
pub use movement::spawn_player;
pub use plugin::PlayerPlugin;
