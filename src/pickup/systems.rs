use super::components::*;
use crate::character::components::Player;
use crate::core::events::LogEvent;
use crate::data::{WeaponAssets, schema::WeaponCatalog};
use crate::inventory::{InventoryStore, components::WeaponDescriptor, events::AcquireWeaponEvent};
use bevy::prelude::*;

/// 按武器表摆放拾取点
pub fn spawn_pickups(
    mut commands: Commands,
    weapon_assets: Res<WeaponAssets>,
    catalogs: Res<Assets<WeaponCatalog>>,
    asset_server: Res<AssetServer>,
) {
    let Some(catalog) = weapon_assets.catalog(&catalogs) else {
        return;
    };

    for entry in &catalog.pickups {
        let Some(weapon) = catalog.find(&entry.weapon) else {
            warn!("拾取点引用了不存在的武器 {}", entry.weapon);
            continue;
        };
        let visual: Handle<Scene> = asset_server.load(weapon.scene.clone());
        commands.spawn((
            Name::new(format!("Pickup {}", weapon.name)),
            SceneRoot(visual.clone()),
            Transform::from_translation(Vec3::from_array(entry.position)),
            WeaponPickup::new(
                WeaponDescriptor::new(weapon.name.clone(), visual),
                entry.pickup_distance,
            ),
        ));
        debug!("拾取点 {} 位于 {:?}", weapon.name, entry.position);
    }
}

/// 距离检测 + E 键拾取；拾取后该物体永久失效
pub fn detect_pickups(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    players: Query<&GlobalTransform, With<Player>>,
    stores: Query<Entity, With<InventoryStore>>,
    mut pickups: Query<(Entity, &GlobalTransform, &mut WeaponPickup)>,
    mut ev_acquire: EventWriter<AcquireWeaponEvent>,
    mut log_event: EventWriter<LogEvent>,
) {
    let (Ok(player), Ok(store)) = (players.single(), stores.single()) else {
        return;
    };
    let player_pos = player.translation();
    let pressed = keys.just_pressed(KeyCode::KeyE);

    for (entity, transform, mut pickup) in &mut pickups {
        if pickup.is_consumed() {
            continue;
        }

        let distance = transform.translation().distance(player_pos);
        if pickup.observe(distance) {
            debug!("进入 {} 的拾取范围，距离 {distance:.2}m", pickup.descriptor.name);
            log_event.write(LogEvent(format!("Press E to pick up {}", pickup.descriptor.name)));
        }

        if let Some(descriptor) = pickup.try_trigger(pressed) {
            log_event.write(LogEvent(format!("Picked up {}!", descriptor.name)));
            ev_acquire.write(AcquireWeaponEvent { store, descriptor });
            // 重名被拒也一样失效
            commands
                .entity(entity)
                .insert(Visibility::Hidden)
                .remove::<WeaponPickup>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::store::tests::weapon;

    struct Fixture {
        app:    App,
        store:  Entity,
        player: Entity,
    }

    fn fixture() -> Fixture {
        let mut app = App::new();
        app.add_event::<AcquireWeaponEvent>()
            .add_event::<LogEvent>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Update, detect_pickups);
        let player = app
            .world_mut()
            .spawn((Player, GlobalTransform::default()))
            .id();
        let store = app.world_mut().spawn(InventoryStore::default()).id();
        Fixture { app, store, player }
    }

    fn place_pickup(scene: &mut Fixture, name: &str, at: Vec3) -> Entity {
        scene
            .app
            .world_mut()
            .spawn((
                GlobalTransform::from_translation(at),
                WeaponPickup::new(weapon(name), DEFAULT_PICKUP_DISTANCE),
            ))
            .id()
    }

    fn move_player(scene: &mut Fixture, to: Vec3) {
        scene
            .app
            .world_mut()
            .entity_mut(scene.player)
            .insert(GlobalTransform::from_translation(to));
    }

    fn press_e(scene: &mut Fixture) {
        scene.app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::KeyE);
        scene.app.update();
        scene.app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
    }

    fn log_lines(scene: &Fixture) -> Vec<String> {
        let events = scene.app.world().resource::<Events<LogEvent>>();
        events.get_cursor().read(events).map(|e| e.0.clone()).collect()
    }

    fn acquire_requests(scene: &Fixture) -> Vec<(Entity, String)> {
        let events = scene.app.world().resource::<Events<AcquireWeaponEvent>>();
        events
            .get_cursor()
            .read(events)
            .map(|e| (e.store, e.descriptor.name.clone()))
            .collect()
    }

    #[test]
    fn press_out_of_range_is_ignored() {
        let mut scene = fixture();
        let pickup = place_pickup(&mut scene, "Rifle", Vec3::new(10.0, 0.0, 0.0));

        press_e(&mut scene);

        assert!(acquire_requests(&scene).is_empty());
        assert!(scene.app.world().get::<WeaponPickup>(pickup).is_some());
    }

    #[test]
    fn press_in_range_requests_acquire_and_deactivates() {
        let mut scene = fixture();
        let pickup = place_pickup(&mut scene, "Rifle", Vec3::new(2.0, 0.0, 0.0));

        press_e(&mut scene);

        assert_eq!(acquire_requests(&scene), vec![(scene.store, "Rifle".to_string())]);
        let world = scene.app.world();
        assert!(world.get::<WeaponPickup>(pickup).is_none());
        assert_eq!(world.get::<Visibility>(pickup), Some(&Visibility::Hidden));
    }

    #[test]
    fn held_key_does_not_trigger_on_approach() {
        let mut scene = fixture();
        let pickup = place_pickup(&mut scene, "Rifle", Vec3::new(6.0, 0.0, 0.0));

        press_e(&mut scene);
        // 按住不放走近
        move_player(&mut scene, Vec3::new(5.0, 0.0, 0.0));
        scene.app.update();

        assert!(acquire_requests(&scene).is_empty());
        assert!(scene.app.world().get::<WeaponPickup>(pickup).is_some());
    }

    #[test]
    fn duplicate_pickup_is_still_consumed() {
        let mut scene = fixture();
        scene.app.add_systems(
            Update,
            crate::inventory::systems::acquire_weapons.after(detect_pickups),
        );
        let first = place_pickup(&mut scene, "Pistol", Vec3::new(1.0, 0.0, 0.0));
        let second = place_pickup(&mut scene, "Pistol", Vec3::new(-30.0, 0.0, 0.0));

        press_e(&mut scene);
        move_player(&mut scene, Vec3::new(-30.0, 0.0, 1.0));
        scene.app.update();
        press_e(&mut scene);

        let lines = log_lines(&scene);
        assert!(lines.contains(&"Picked up Pistol!".to_string()));
        assert!(lines.contains(&"You already have Pistol!".to_string()));

        let world = scene.app.world();
        assert_eq!(world.get::<InventoryStore>(scene.store).unwrap().len(), 1);
        for pickup in [first, second] {
            assert!(world.get::<WeaponPickup>(pickup).is_none());
            assert_eq!(world.get::<Visibility>(pickup), Some(&Visibility::Hidden));
        }
    }

    #[test]
    fn spawn_pickups_skips_unresolvable_entries() {
        let mut app = crate::data::tests::catalog_app();
        app.add_systems(Update, spawn_pickups);
        app.update();

        let world = app.world_mut();
        let mut names: Vec<String> = world
            .query::<&WeaponPickup>()
            .iter(world)
            .map(|p| p.descriptor.name.clone())
            .collect();
        names.sort();
        assert_eq!(names, vec!["Revolver".to_string(), "Rifle".to_string()]);

        let distances: Vec<f32> = world
            .query::<&WeaponPickup>()
            .iter(world)
            .map(|p| p.pickup_distance)
            .collect();
        assert!(distances.iter().all(|d| *d == DEFAULT_PICKUP_DISTANCE));
    }

    #[test]
    fn boundary_distance_counts_as_in_range() {
        let mut scene = fixture();
        place_pickup(&mut scene, "Pistol", Vec3::new(0.0, 0.0, DEFAULT_PICKUP_DISTANCE));

        press_e(&mut scene);

        assert_eq!(acquire_requests(&scene).len(), 1);
    }
}
