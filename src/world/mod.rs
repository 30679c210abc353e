//! World module - the arena and its materials.

mod arena;
mod materials;
mod plugin;

pub use arena::{arena_blocks, setup_arena, ArenaBlock, ArenaGeometry, PLAYER_START};
pub use materials::MaterialRegistry;
pub use plugin::WorldPlugin;
