//! Weapons and the projectile data they fire.
//!
//! A weapon is anything that can name itself, describe its projectile and
//! turn a fire request into a spawned projectile. New weapons are new
//! implementors of `Weapon`, not subclasses.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use serde::Deserialize;

/// Primitive geometry used for projectiles, unit sized before scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum ProjectileShape {
    #[default]
    Sphere,
    Cube,
    Capsule,
}

impl ProjectileShape {
    pub fn mesh(&self) -> Mesh {
        match self {
            ProjectileShape::Sphere => Sphere::new(0.5).into(),
            ProjectileShape::Cube => Cuboid::new(1.0, 1.0, 1.0).into(),
            ProjectileShape::Capsule => Capsule3d::new(0.25, 0.5).into(),
        }
    }

    /// Collider matching `mesh`. Rapier applies the entity scale on top.
    pub fn collider(&self) -> Collider {
        match self {
            ProjectileShape::Sphere => Collider::ball(0.5),
            ProjectileShape::Cube => Collider::cuboid(0.5, 0.5, 0.5),
            ProjectileShape::Capsule => Collider::capsule_y(0.25, 0.25),
        }
    }
}

/// Everything needed to spawn and launch one projectile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectileDescriptor {
    #[serde(default)]
    pub shape: ProjectileShape,
    /// Name in the material registry, if any
    #[serde(default)]
    pub material: Option<String>,
    /// Uniform visual and collider scale
    pub scale: f32,
    /// Magnitude of the launch impulse
    pub speed: f32,
    pub mass: f32,
    /// Targets closer than this are hit instantly, further ones get a
    /// ballistic projectile
    pub projectile_init_distance: f32,
}

/// Receives projectile spawn requests from weapons.
pub trait ProjectileSpawner {
    fn spawn_projectile(&mut self, transform: Transform, descriptor: &ProjectileDescriptor);
}

/// A weapon the character can hold.
pub trait Weapon: Send + Sync + 'static {
    fn name(&self) -> &str;

    fn descriptor(&self) -> &ProjectileDescriptor;

    /// Fire one projectile from `position` facing `rotation`.
    fn request_fire(&self, position: Vec3, rotation: Quat, spawner: &mut dyn ProjectileSpawner) {
        let descriptor = self.descriptor();
        let transform = Transform::from_translation(position)
            .with_rotation(rotation)
            .with_scale(Vec3::splat(descriptor.scale));

        spawner.spawn_projectile(transform, descriptor);
    }
}

/// The starter weapon: small heavy spheres.
#[derive(Debug, Clone)]
pub struct DefaultWeapon {
    descriptor: ProjectileDescriptor,
}

impl DefaultWeapon {
    pub const NAME: &'static str = "DefaultWeapon";
}

impl Default for DefaultWeapon {
    fn default() -> Self {
        Self {
            descriptor: ProjectileDescriptor {
                shape: ProjectileShape::Sphere,
                material: Some("default".to_string()),
                scale: 0.1,
                speed: 5000.0,
                mass: 1000.0,
                projectile_init_distance: 20.0,
            },
        }
    }
}

impl Weapon for DefaultWeapon {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn descriptor(&self) -> &ProjectileDescriptor {
        &self.descriptor
    }
}

/// Weapon defined in a RON file under assets/data/weapons/.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DefinedWeapon {
    pub name: String,
    pub projectile: ProjectileDescriptor,
}

impl Weapon for DefinedWeapon {
    fn name(&self) -> &str {
        &self.name
    }

    fn descriptor(&self) -> &ProjectileDescriptor {
        &self.projectile
    }
}

/// The weapon currently held, if any.
#[derive(Component, Default)]
pub struct ActiveWeapon(Option<Box<dyn Weapon>>);

impl ActiveWeapon {
    pub fn new(weapon: impl Weapon) -> Self {
        Self(Some(Box::new(weapon)))
    }

    pub fn equip(&mut self, weapon: impl Weapon) {
        self.equip_boxed(Box::new(weapon));
    }

    pub fn equip_boxed(&mut self, weapon: Box<dyn Weapon>) {
        self.0 = Some(weapon);
    }

    pub fn weapon(&self) -> Option<&dyn Weapon> {
        self.0.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.weapon().map(|weapon| weapon.name())
    }

    pub fn projectile_init_distance(&self) -> Option<f32> {
        self.weapon()
            .map(|weapon| weapon.descriptor().projectile_init_distance)
    }

    /// Fire the held weapon. Returns false, and does nothing, when empty.
    pub fn request_fire(
        &self,
        position: Vec3,
        rotation: Quat,
        spawner: &mut dyn ProjectileSpawner,
    ) -> bool {
        let Some(weapon) = self.weapon() else {
            return false;
        };
        weapon.request_fire(position, rotation, spawner);
        true
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::RecordingSpawner;
    use super::*;

    #[test]
    fn test_empty_slot_fires_nothing() {
        let weapon = ActiveWeapon::default();
        let mut spawner = RecordingSpawner::default();

        assert!(!weapon.request_fire(Vec3::ONE, Quat::IDENTITY, &mut spawner));
        assert!(spawner.spawned.is_empty());
        assert_eq!(weapon.projectile_init_distance(), None);
    }

    #[test]
    fn test_default_weapon_spawns_scaled_projectile_at_pose() {
        let weapon = ActiveWeapon::new(DefaultWeapon::default());
        let mut spawner = RecordingSpawner::default();
        let position = Vec3::new(1.0, 2.0, -3.0);
        let rotation = Quat::from_rotation_y(0.5);

        assert!(weapon.request_fire(position, rotation, &mut spawner));

        assert_eq!(spawner.spawned.len(), 1);
        let (transform, descriptor) = &spawner.spawned[0];
        assert_eq!(transform.translation, position);
        assert_eq!(transform.rotation, rotation);
        assert_eq!(transform.scale, Vec3::splat(0.1));
        assert_eq!(descriptor.speed, 5000.0);
        assert_eq!(descriptor.mass, 1000.0);
    }

    #[test]
    fn test_each_request_spawns_once() {
        let weapon = ActiveWeapon::new(DefaultWeapon::default());
        let mut spawner = RecordingSpawner::default();

        for _ in 0..3 {
            weapon.request_fire(Vec3::ZERO, Quat::IDENTITY, &mut spawner);
        }

        assert_eq!(spawner.spawned.len(), 3);
    }

    #[test]
    fn test_equip_replaces_weapon() {
        let mut weapon = ActiveWeapon::new(DefaultWeapon::default());
        assert_eq!(weapon.projectile_init_distance(), Some(20.0));

        let defined: DefinedWeapon = ron::from_str(
            r#"(
                name: "Brick",
                projectile: (
                    shape: Cube,
                    scale: 0.4,
                    speed: 800.0,
                    mass: 40.0,
                    projectile_init_distance: 5.0,
                ),
            )"#,
        )
        .unwrap();
        weapon.equip(defined);

        assert_eq!(weapon.name(), Some("Brick"));
        assert_eq!(weapon.projectile_init_distance(), Some(5.0));
        assert_eq!(weapon.weapon().unwrap().descriptor().material, None);
    }
}
