//! Firing and equipping.

use bevy::prelude::*;

use super::projectile::{
    age_projectiles, launch_projectiles, observe_projectile_collisions, ProjectileCommands,
};
use super::registry::{load_weapon_definitions, WeaponRegistry};
use super::weapon::ActiveWeapon;
use crate::core::{ControllerSet, EquipWeapon};
use crate::player::{CharacterController, Player};

/// Set up combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app.init_resource::<WeaponRegistry>()
        .add_systems(Startup, load_weapon_definitions)
        .add_systems(Update, equip_weapons.in_set(ControllerSet::Intent))
        .add_systems(
            Update,
            (fire_weapon, launch_projectiles)
                .chain()
                .in_set(ControllerSet::Fire),
        )
        .add_systems(
            Update,
            (age_projectiles, observe_projectile_collisions).in_set(ControllerSet::Physics),
        );
}

/// Fire the player's weapon from the latest aim, once per trigger.
pub fn fire_weapon(
    mut commands: Commands,
    mut player_query: Query<(&mut CharacterController, &ActiveWeapon), With<Player>>,
) {
    let Ok((mut controller, weapon)) = player_query.get_single_mut() else {
        return;
    };

    if !controller.take_fire_request() {
        return;
    }

    let aim = controller.aim;
    let mut spawner = ProjectileCommands::new(&mut commands);

    if !weapon.request_fire(aim.position, aim.rotation, &mut spawner) {
        debug!("Fire requested with no weapon equipped");
    }
}

/// Swap the player's weapon on request.
pub fn equip_weapons(
    mut events: EventReader<EquipWeapon>,
    registry: Res<WeaponRegistry>,
    mut player_query: Query<&mut ActiveWeapon, With<Player>>,
) {
    let Ok(mut active) = player_query.get_single_mut() else {
        events.clear();
        return;
    };

    for EquipWeapon { name } in events.read() {
        match registry.create(name) {
            Some(weapon) => {
                active.equip_boxed(weapon);
                info!("Equipped weapon: {}", name);
            }
            None => warn!("Unknown weapon: {}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::projectile::Projectile;
    use crate::combat::weapon::DefaultWeapon;
    use crate::player::{AimCache, CharacterConfig};

    fn fire_app(weapon: ActiveWeapon) -> (App, Entity) {
        let mut app = App::new();
        app.add_systems(Update, fire_weapon);

        let mut controller = CharacterController::new(CharacterConfig::default());
        controller.aim = AimCache {
            position: Vec3::new(0.0, 1.0, -20.0),
            rotation: Quat::from_rotation_y(0.25),
        };
        controller.request_fire();

        let player = app.world_mut().spawn((Player, controller, weapon)).id();
        (app, player)
    }

    fn projectile_count(app: &mut App) -> usize {
        let world = app.world_mut();
        world.query::<&Projectile>().iter(world).count()
    }

    #[test]
    fn test_fire_without_weapon_spawns_nothing() {
        let (mut app, player) = fire_app(ActiveWeapon::default());

        app.update();

        assert_eq!(projectile_count(&mut app), 0);
        let mut controller = app.world_mut().get_mut::<CharacterController>(player).unwrap();
        assert!(!controller.take_fire_request(), "trigger is consumed anyway");
    }

    #[test]
    fn test_fire_spawns_one_projectile_at_aim() {
        let (mut app, _) = fire_app(ActiveWeapon::new(DefaultWeapon::default()));

        app.update();
        app.update();

        let world = app.world_mut();
        let mut query = world.query::<(&Projectile, &Transform)>();
        let spawned: Vec<_> = query.iter(world).collect();
        assert_eq!(spawned.len(), 1);

        let (_, transform) = spawned[0];
        assert_eq!(transform.translation, Vec3::new(0.0, 1.0, -20.0));
        assert_eq!(transform.rotation, Quat::from_rotation_y(0.25));
        assert_eq!(transform.scale, Vec3::splat(0.1));
    }

    #[test]
    fn test_equip_by_name() {
        let mut app = App::new();
        app.add_event::<EquipWeapon>()
            .init_resource::<WeaponRegistry>()
            .add_systems(Update, equip_weapons);
        let player = app.world_mut().spawn((Player, ActiveWeapon::default())).id();

        app.world_mut().send_event(EquipWeapon { name: "Rocket".to_string() });
        app.update();
        assert!(app.world().get::<ActiveWeapon>(player).unwrap().name().is_none());

        app.world_mut().send_event(EquipWeapon { name: DefaultWeapon::NAME.to_string() });
        app.update();
        assert_eq!(
            app.world().get::<ActiveWeapon>(player).unwrap().name(),
            Some(DefaultWeapon::NAME)
        );
    }
}
