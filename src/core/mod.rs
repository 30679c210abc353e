//! Core game module - states, events, errors, and fundamental systems.
//!
//! This module provides the foundation that all other game systems build upon.

mod error;
mod events;
mod plugin;
mod sets;
mod states;

pub use error::*;
pub use events::*;
pub use plugin::CorePlugin;
pub use sets::ControllerSet;
pub use states::*;
