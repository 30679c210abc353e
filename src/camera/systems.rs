//! Camera rig systems: spawn, follow, zoom, teardown.

use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use bevy::window::{CursorGrabMode, PrimaryWindow};

use super::aim::AimMarker;
use super::rig::{CameraPivot, CameraRig, PlayerCamera, RigLifecycle};
use crate::player::{CharacterController, Player};
use crate::world::MaterialRegistry;

/// Scale of the aim marker sphere.
const MARKER_SCALE: f32 = 0.12;

/// Spawn pivot, camera and aim marker for the player.
pub fn spawn_camera_rig(
    mut commands: Commands,
    mut lifecycle: ResMut<RigLifecycle>,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<Res<MaterialRegistry>>,
    player_query: Query<(Entity, &Transform, &CharacterController), With<Player>>,
) {
    if lifecycle.is_active() {
        warn!("Camera rig already active, not spawning another");
        return;
    }

    let player = player_query.get_single().ok();
    let eye_height = player.map_or(0.0, |(_, _, controller)| controller.config().eye_height);
    let fov = player.map_or(0.0, |(_, _, controller)| controller.desired_fov());

    let rig = match CameraRig::attach(
        player.map(|(entity, transform, _)| (entity, transform.translation)),
        eye_height,
    ) {
        Ok(rig) => rig,
        Err(e) => {
            error!("Failed to build camera rig: {}", e);
            return;
        }
    };

    let camera_transform =
        Transform::from_translation(rig.camera_position()).with_rotation(rig.rotation());
    let pivot_transform =
        Transform::from_translation(rig.pivot_position()).with_rotation(rig.rotation());

    let pivot = commands
        .spawn((Name::new("CameraPivot"), CameraPivot, rig, pivot_transform))
        .id();

    let camera = commands
        .spawn((
            Name::new("PlayerCamera"),
            PlayerCamera,
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                fov: fov.to_radians(),
                ..default()
            }),
            camera_transform,
        ))
        .id();

    let mut marker = commands.spawn((
        Name::new("AimMarker"),
        AimMarker,
        Transform::from_translation(pivot_transform.translation + Vec3::NEG_Y)
            .with_scale(Vec3::splat(MARKER_SCALE)),
        Visibility::default(),
        // Always drawn, however far away the hit is
        NoFrustumCulling,
    ));
    if let Some(mut meshes) = meshes {
        marker.insert(Mesh3d(meshes.add(Sphere::new(1.0))));
    }
    if let Some(material) = materials.and_then(|registry| registry.get("default")) {
        marker.insert(MeshMaterial3d(material));
    }
    let marker = marker.id();

    lifecycle.activate(pivot, camera, marker);
    info!("Camera rig spawned");
}

/// Consume the player's rotation delta and move pivot and camera.
pub fn update_camera_rig(
    mut player_query: Query<(&Transform, &mut CharacterController), With<Player>>,
    mut rig_query: Query<
        (&mut CameraRig, &mut Transform),
        (With<CameraPivot>, Without<Player>),
    >,
    mut camera_query: Query<
        &mut Transform,
        (With<PlayerCamera>, Without<CameraPivot>, Without<Player>),
    >,
) {
    let Ok((player_transform, mut controller)) = player_query.get_single_mut() else {
        return;
    };

    // Drained even without a rig so stale input never piles up
    let delta = controller.take_rotation_delta();

    let Ok((mut rig, mut pivot_transform)) = rig_query.get_single_mut() else {
        return;
    };

    let rotation = rig.update_view(delta, player_transform.translation, controller.config());

    pivot_transform.translation = rig.pivot_position();
    pivot_transform.rotation = rotation;

    if let Ok(mut camera_transform) = camera_query.get_single_mut() {
        camera_transform.translation = rig.camera_position();
        camera_transform.rotation = rotation;
    }
}

/// Set a perspective projection's field of view, in degrees.
pub fn set_field_of_view(projection: &mut Projection, degrees: f32) {
    if let Projection::Perspective(perspective) = projection {
        perspective.fov = degrees.to_radians();
    }
}

/// Switch between normal and zoom field of view.
pub fn apply_zoom(
    mut applied: Local<Option<f32>>,
    player_query: Query<&CharacterController, With<Player>>,
    mut camera_query: Query<&mut Projection, With<PlayerCamera>>,
) {
    let Ok(controller) = player_query.get_single() else {
        return;
    };
    let Ok(mut projection) = camera_query.get_single_mut() else {
        return;
    };

    let fov = controller.desired_fov();
    if *applied == Some(fov) {
        return;
    }

    set_field_of_view(&mut projection, fov);
    *applied = Some(fov);
}

/// Remove pivot, camera and marker when leaving gameplay.
pub fn teardown_camera_rig(mut commands: Commands, mut lifecycle: ResMut<RigLifecycle>) {
    let Some(entities) = lifecycle.tear_down() else {
        return;
    };

    for entity in entities {
        if let Some(entity_commands) = commands.get_entity(entity) {
            entity_commands.despawn_recursive();
        }
    }

    info!("Camera rig torn down");
}

/// Grab and hide cursor while playing.
pub fn grab_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
}

/// Release cursor when paused or leaving gameplay.
pub fn release_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}
