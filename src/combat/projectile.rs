//! Projectile lifecycle: spawned, launched once, then aged until removal.

use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use bevy_rapier3d::prelude::*;

use super::weapon::{ProjectileDescriptor, ProjectileSpawner};
use crate::world::MaterialRegistry;

/// Seconds a projectile lives before it is removed.
pub const MAX_PROJECTILE_LIFETIME: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectilePhase {
    /// Entity exists, not yet physicalized
    Spawned,
    Alive,
    /// Removed at the end of this frame
    Expired,
}

#[derive(Component, Debug, Clone)]
pub struct Projectile {
    descriptor: ProjectileDescriptor,
    lifetime: f32,
    phase: ProjectilePhase,
}

impl Projectile {
    pub fn new(descriptor: ProjectileDescriptor) -> Self {
        Self {
            descriptor,
            lifetime: 0.0,
            phase: ProjectilePhase::Spawned,
        }
    }

    pub fn descriptor(&self) -> &ProjectileDescriptor {
        &self.descriptor
    }

    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    pub fn phase(&self) -> ProjectilePhase {
        self.phase
    }

    /// Impulse pushing the projectile along its facing.
    pub fn launch_impulse(&self, rotation: Quat) -> Vec3 {
        rotation * Vec3::NEG_Z * self.descriptor.speed
    }

    pub fn mark_alive(&mut self) {
        if self.phase == ProjectilePhase::Spawned {
            self.phase = ProjectilePhase::Alive;
        }
    }

    /// Age by `dt`. Expires once lifetime goes past the maximum.
    pub fn tick(&mut self, dt: f32) -> ProjectilePhase {
        self.lifetime += dt;
        if self.lifetime > MAX_PROJECTILE_LIFETIME {
            self.phase = ProjectilePhase::Expired;
        }
        self.phase
    }
}

/// Spawns projectile entities through `Commands`.
pub struct ProjectileCommands<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
}

impl<'a, 'w, 's> ProjectileCommands<'a, 'w, 's> {
    pub fn new(commands: &'a mut Commands<'w, 's>) -> Self {
        Self { commands }
    }
}

impl ProjectileSpawner for ProjectileCommands<'_, '_, '_> {
    fn spawn_projectile(&mut self, transform: Transform, descriptor: &ProjectileDescriptor) {
        self.commands.spawn((
            Name::new("Projectile"),
            Projectile::new(descriptor.clone()),
            transform,
            Visibility::default(),
        ));
    }
}

/// Give freshly spawned projectiles geometry and physics, then push them.
pub fn launch_projectiles(
    mut commands: Commands,
    mut meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<Res<MaterialRegistry>>,
    mut query: Query<(Entity, &Transform, &mut Projectile)>,
) {
    for (entity, transform, mut projectile) in query.iter_mut() {
        if projectile.phase() != ProjectilePhase::Spawned {
            continue;
        }

        let descriptor = projectile.descriptor().clone();
        let mut entity_commands = commands.entity(entity);

        // Geometry is optional, physics is not
        if let Some(meshes) = meshes.as_deref_mut() {
            entity_commands.insert(Mesh3d(meshes.add(descriptor.shape.mesh())));
        }
        if let Some(material) = descriptor
            .material
            .as_deref()
            .and_then(|name| materials.as_ref().and_then(|registry| registry.get(name)))
        {
            entity_commands.insert(MeshMaterial3d(material));
        }

        entity_commands.insert((
            RigidBody::Dynamic,
            descriptor.shape.collider(),
            ColliderMassProperties::Mass(descriptor.mass),
            ExternalImpulse {
                impulse: projectile.launch_impulse(transform.rotation),
                torque_impulse: Vec3::ZERO,
            },
            ActiveEvents::COLLISION_EVENTS,
            Ccd::enabled(),
            NoFrustumCulling,
        ));

        projectile.mark_alive();
        debug!("Projectile launched from {:?}", transform.translation);
    }
}

/// Age projectiles and remove expired ones.
pub fn age_projectiles(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Projectile)>,
) {
    let dt = time.delta_secs();

    for (entity, mut projectile) in query.iter_mut() {
        if projectile.tick(dt) == ProjectilePhase::Expired {
            debug!("Projectile expired after {:.2}s", projectile.lifetime());
            commands.entity(entity).despawn_recursive();
        }
    }
}

/// Collision hook. Projectiles keep flying after impact.
pub fn observe_projectile_collisions(
    mut collisions: EventReader<CollisionEvent>,
    query: Query<(), With<Projectile>>,
) {
    for event in collisions.read() {
        if let CollisionEvent::Started(a, b, _) = event {
            if query.contains(*a) || query.contains(*b) {
                debug!("Projectile collision between {:?} and {:?}", a, b);
            }
        }
    }
}
