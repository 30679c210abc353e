//! A small test arena: floor, pillars, and targets at hitscan and ballistic range.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::materials::MaterialRegistry;
use crate::combat::Projectile;
use crate::player::{spawn_player, CharacterConfig, Player};

/// Marker for entities that belong to the arena.
#[derive(Component)]
pub struct ArenaGeometry;

/// Where the player spawns.
pub const PLAYER_START: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// One solid box of the arena.
#[derive(Debug, Clone, Copy)]
pub struct ArenaBlock {
    pub name: &'static str,
    pub center: Vec3,
    pub size: Vec3,
    pub material: &'static str,
}

/// Static layout of the arena.
pub fn arena_blocks() -> Vec<ArenaBlock> {
    let mut blocks = vec![ArenaBlock {
        name: "Floor",
        center: Vec3::new(0.0, -0.5, 0.0),
        size: Vec3::new(80.0, 1.0, 80.0),
        material: "stone",
    }];

    for (x, z) in [(-8.0, -8.0), (8.0, -8.0), (-8.0, 8.0), (8.0, 8.0)] {
        blocks.push(ArenaBlock {
            name: "Pillar",
            center: Vec3::new(x, 2.0, z),
            size: Vec3::new(1.5, 4.0, 1.5),
            material: "stone",
        });
    }

    // Close enough to be hit instantly by the default weapon
    blocks.push(ArenaBlock {
        name: "NearTarget",
        center: Vec3::new(0.0, 1.0, -10.0),
        size: Vec3::new(2.0, 2.0, 0.5),
        material: "target",
    });

    // Far enough for a real projectile flight
    blocks.push(ArenaBlock {
        name: "FarTarget",
        center: Vec3::new(0.0, 2.0, -40.0),
        size: Vec3::new(4.0, 4.0, 1.0),
        material: "target",
    });

    blocks
}

/// Build the arena and spawn the player.
pub fn setup_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    registry: Res<MaterialRegistry>,
    config: Res<CharacterConfig>,
) {
    info!("Building arena");

    for block in arena_blocks() {
        let mut entity = commands.spawn((
            Name::new(block.name),
            Mesh3d(meshes.add(Cuboid::new(block.size.x, block.size.y, block.size.z))),
            Transform::from_translation(block.center),
            Collider::cuboid(block.size.x / 2.0, block.size.y / 2.0, block.size.z / 2.0),
            ArenaGeometry,
        ));
        if let Some(material) = registry.get_or_default(block.material) {
            entity.insert(MeshMaterial3d(material));
        }
    }

    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.9, 1.0),
        brightness: 300.0,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 6000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_3,
            std::f32::consts::FRAC_PI_6,
            0.0,
        )),
        ArenaGeometry,
    ));

    commands.spawn((
        PointLight {
            intensity: 200000.0,
            range: 30.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 6.0, -20.0),
        ArenaGeometry,
    ));

    spawn_player(&mut commands, PLAYER_START, &config);
}

/// Clean up arena, player and projectiles when leaving InGame state.
pub fn cleanup_arena(
    mut commands: Commands,
    query: Query<Entity, Or<(With<ArenaGeometry>, With<Player>, With<Projectile>)>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{DefaultWeapon, Weapon};

    fn target(name: &str) -> ArenaBlock {
        arena_blocks()
            .into_iter()
            .find(|block| block.name == name)
            .unwrap()
    }

    #[test]
    fn test_targets_straddle_init_distance() {
        let init_distance = DefaultWeapon::default().descriptor().projectile_init_distance;

        let near = target("NearTarget").center.distance(PLAYER_START);
        let far = target("FarTarget").center.distance(PLAYER_START);

        assert!(near < init_distance);
        assert!(far > init_distance);
        assert!(far < crate::camera::MAX_AIM_DISTANCE);
    }

    #[test]
    fn test_player_start_is_free() {
        for block in arena_blocks() {
            let half = block.size / 2.0;
            let inside = (PLAYER_START - block.center).abs().cmple(half).all();
            assert!(!inside, "player start inside {}", block.name);
        }
    }

    #[test]
    fn test_cleanup_removes_arena_player_and_projectiles() {
        let mut app = App::new();
        app.add_systems(Update, cleanup_arena);

        let world = app.world_mut();
        let block = world.spawn(ArenaGeometry).id();
        let player = world.spawn(Player).id();
        let projectile = world
            .spawn(Projectile::new(DefaultWeapon::default().descriptor().clone()))
            .id();
        let bystander = world.spawn(Transform::default()).id();

        app.update();

        let world = app.world();
        assert!(world.get_entity(block).is_err());
        assert!(world.get_entity(player).is_err());
        assert!(world.get_entity(projectile).is_err());
        assert!(world.get_entity(bystander).is_ok());
    }
}
