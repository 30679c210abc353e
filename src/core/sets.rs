//! Per-frame ordering of the character controller.

use bevy::prelude::*;

/// System sets run in this order, once per frame, while playing.
///
/// Input → Intent → View → Aim → Locomotion → Fire → Physics
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    /// Device state becomes action events; ground contact is read back
    Input,
    /// Action events update the character state
    Intent,
    /// Camera rig consumes the rotation delta
    View,
    /// Screen-center raycast with the updated camera
    Aim,
    /// Movement intent is integrated against the body
    Locomotion,
    /// Pending fire trigger goes to the active weapon; new projectiles launch
    Fire,
    /// Bodies are driven and projectiles aged
    Physics,
}
