//! Camera module - pivot rig, screen-center aim, and field of view.

mod aim;
mod plugin;
mod rig;
mod systems;

pub use aim::{
    resolve_aim, AimMarker, AimSolution, AimSubject, RayHit, RaycastQuery, ViewProjection,
    MAX_AIM_DISTANCE,
};
pub use plugin::CameraPlugin;
pub use rig::{CameraPivot, CameraRig, PlayerCamera, RigError, RigLifecycle};
pub use systems::set_field_of_view;
