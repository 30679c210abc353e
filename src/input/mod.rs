//! Input module - action names, bindings, and the action dispatcher.

mod actions;
mod bindings;
mod dispatch;
mod plugin;

pub use actions::*;
pub use bindings::ActionBindings;
pub use dispatch::dispatch_actions;
pub use plugin::InputPlugin;
