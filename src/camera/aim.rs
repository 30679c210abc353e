//! Screen-center aiming.
//!
//! Every frame a ray is cast from the middle of the screen. Close targets
//! are hit instantly (the projectile spawns on the hit point), anything
//! further than the weapon's init distance gets a real projectile flight.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::rig::CameraRig;
use crate::combat::ActiveWeapon;
use crate::player::{AimCache, CharacterController, Player};

/// Maximum length of the aim ray.
pub const MAX_AIM_DISTANCE: f32 = 150.0;

/// Aim marker sits this far below the character when nothing is hit.
const MARKER_PARK_OFFSET: Vec3 = Vec3::NEG_Y;

/// A ray hit against the physics world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub point: Vec3,
    pub distance: f32,
}

/// Ray queries against the physics world.
pub trait RaycastQuery {
    fn cast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        exclude: Option<Entity>,
    ) -> Option<RayHit>;
}

/// What the aim resolver needs to know about the view.
pub trait ViewProjection {
    /// World position at the center of the screen.
    fn screen_center_origin(&self) -> Vec3;
    /// World direction through the center of the screen.
    fn screen_center_direction(&self) -> Vec3;
    /// Turn a world direction into view space.
    fn transform_direction(&self, direction: Vec3) -> Vec3;
    fn rotation(&self) -> Quat;
}

impl RaycastQuery for RapierContext {
    fn cast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        exclude: Option<Entity>,
    ) -> Option<RayHit> {
        let mut filter = QueryFilter::default();
        if let Some(entity) = exclude {
            filter = filter.exclude_collider(entity);
        }

        self.cast_ray(origin, direction, max_distance, true, filter)
            .map(|(entity, distance)| RayHit {
                entity,
                point: origin + direction * distance,
                distance,
            })
    }
}

/// The character being aimed for.
#[derive(Debug, Clone, Copy)]
pub struct AimSubject {
    /// Collider excluded from the ray
    pub body: Entity,
    pub position: Vec3,
    pub forward: Vec3,
}

/// Result of one aim resolve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimSolution {
    pub spawn_position: Vec3,
    pub look_rotation: Quat,
    pub hit: Option<RayHit>,
    /// Where the 3D cursor goes
    pub marker_position: Vec3,
}

impl AimSolution {
    pub fn cache(&self) -> AimCache {
        AimCache {
            position: self.spawn_position,
            rotation: self.look_rotation,
        }
    }
}

/// Resolve where a projectile should spawn and which way it should face.
///
/// The default spawn point is `init_distance` ahead of the screen center
/// along the view-transformed character forward. A hit closer than that
/// moves the spawn onto the hit point.
pub fn resolve_aim(
    init_distance: f32,
    subject: &AimSubject,
    view: &impl ViewProjection,
    physics: &impl RaycastQuery,
) -> AimSolution {
    let origin = view.screen_center_origin();
    let direction = view.screen_center_direction();
    let forward = view.transform_direction(subject.forward);

    let mut spawn_position = origin + forward * init_distance;

    let hit = physics
        .cast(origin, direction, MAX_AIM_DISTANCE, Some(subject.body))
        .filter(|hit| hit.distance <= MAX_AIM_DISTANCE);

    let marker_position = match hit {
        Some(hit) => {
            if hit.distance < init_distance {
                spawn_position = hit.point;
            }
            hit.point
        }
        None => subject.position + MARKER_PARK_OFFSET,
    };

    AimSolution {
        spawn_position,
        look_rotation: view.rotation(),
        hit,
        marker_position,
    }
}

/// The 3D cursor showing what the screen center points at.
#[derive(Component)]
pub struct AimMarker;

/// Resolve the player's aim and move the aim marker.
pub fn resolve_player_aim(
    rapier_context: Query<&RapierContext>,
    rig_query: Query<&CameraRig>,
    mut player_query: Query<
        (Entity, &Transform, &ActiveWeapon, &mut CharacterController),
        With<Player>,
    >,
    mut marker_query: Query<&mut Transform, (With<AimMarker>, Without<Player>)>,
) {
    let Ok(context) = rapier_context.get_single() else {
        return;
    };
    let Ok(rig) = rig_query.get_single() else {
        return;
    };
    let Ok((entity, transform, weapon, mut controller)) = player_query.get_single_mut() else {
        return;
    };
    let Some(init_distance) = weapon.projectile_init_distance() else {
        return;
    };

    let subject = AimSubject {
        body: entity,
        position: transform.translation,
        forward: transform.forward().as_vec3(),
    };

    let solution = resolve_aim(init_distance, &subject, rig, context);
    controller.aim = solution.cache();

    if let Ok(mut marker) = marker_query.get_single_mut() {
        marker.translation = solution.marker_position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FixedView {
        origin: Vec3,
        rotation: Quat,
    }

    impl ViewProjection for FixedView {
        fn screen_center_origin(&self) -> Vec3 {
            self.origin
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

    /// Hits at a fixed distance along the ray, or never. Ignores the
    /// requested max distance.
    #[derive(Default)]
    struct MockRaycast {
        hit_distance: Option<f32>,
        calls: RefCell<Vec<(f32, Option<Entity>)>>,
    }

    impl RaycastQuery for MockRaycast {
        fn cast(
            &self,
            origin: Vec3,
            direction: Vec3,
            max_distance: f32,
            exclude: Option<Entity>,
        ) -> Option<RayHit> {
            self.calls.borrow_mut().push((max_distance, exclude));
            self.hit_distance.map(|distance| RayHit {
                entity: Entity::from_raw(99),
                point: origin + direction * distance,
                distance,
            })
        }
    }

    fn subject() -> AimSubject {
        AimSubject {
            body: Entity::from_raw(7),
            position: Vec3::new(0.0, 1.0, 0.0),
            forward: Vec3::NEG_Z,
        }
    }

    fn view() -> FixedView {
        FixedView {
            origin: Vec3::new(0.0, 2.0, 0.0),
            rotation: Quat::IDENTITY,
        }
    }

    #[test]
    fn test_close_hit_spawns_on_hit_point() {
        let physics = MockRaycast { hit_distance: Some(5.0), ..default() };

        let solution = resolve_aim(20.0, &subject(), &view(), &physics);

        assert_eq!(solution.spawn_position, Vec3::new(0.0, 2.0, -5.0));
        assert_eq!(solution.marker_position, Vec3::new(0.0, 2.0, -5.0));
    }

    #[test]
    fn test_far_hit_spawns_at_init_distance() {
        let physics = MockRaycast { hit_distance: Some(20.0), ..default() };

        let solution = resolve_aim(20.0, &subject(), &view(), &physics);

        assert_eq!(solution.spawn_position, Vec3::new(0.0, 2.0, -20.0));
        // The marker still follows the hit
        assert_eq!(solution.marker_position, Vec3::new(0.0, 2.0, -20.0));
        assert!(solution.hit.is_some());
    }

    #[test]
    fn test_no_hit_parks_marker_below_character() {
        let physics = MockRaycast::default();

        let solution = resolve_aim(20.0, &subject(), &view(), &physics);

        assert_eq!(solution.spawn_position, Vec3::new(0.0, 2.0, -20.0));
        assert_eq!(solution.marker_position, Vec3::ZERO);
        assert!(solution.hit.is_none());
    }

    #[test]
    fn test_hit_beyond_max_distance_is_ignored() {
        let physics = MockRaycast { hit_distance: Some(MAX_AIM_DISTANCE + 1.0), ..default() };

        let solution = resolve_aim(20.0, &subject(), &view(), &physics);

        assert!(solution.hit.is_none());
        assert_eq!(solution.marker_position, Vec3::ZERO);
        assert_eq!(solution.spawn_position, Vec3::new(0.0, 2.0, -20.0));
    }

    #[test]
    fn test_hit_at_max_distance_counts() {
        let physics = MockRaycast { hit_distance: Some(MAX_AIM_DISTANCE), ..default() };

        let solution = resolve_aim(20.0, &subject(), &view(), &physics);

        assert_eq!(solution.marker_position, Vec3::new(0.0, 2.0, -MAX_AIM_DISTANCE));
    }

    #[test]
    fn test_ray_excludes_character_and_uses_max_distance() {
        let physics = MockRaycast::default();

        resolve_aim(20.0, &subject(), &view(), &physics);

        assert_eq!(
            physics.calls.borrow().as_slice(),
            &[(MAX_AIM_DISTANCE, Some(Entity::from_raw(7)))]
        );
    }

    #[test]
    fn test_look_rotation_is_view_rotation() {
        let rotation = Quat::from_euler(EulerRot::YXZ, 0.7, -0.3, 0.0);
        let view = FixedView { origin: Vec3::ZERO, rotation };
        let physics = MockRaycast::default();

        let solution = resolve_aim(10.0, &subject(), &view, &physics);

        assert_eq!(solution.look_rotation, rotation);
        let expected = rotation * Vec3::NEG_Z * 10.0;
        assert!(solution.spawn_position.distance(expected) < 1e-5);
        assert_eq!(solution.cache().rotation, rotation);
    }
}
