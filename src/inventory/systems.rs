use super::{components::*, events::*, store::*};
use crate::core::events::LogEvent;
use crate::data::{WeaponAssets, schema::WeaponCatalog};
use crate::pickup::components::WeaponPickup;
use bevy::prelude::*;

/// 用 Commands 实现的宿主：武器实例挂在 anchor 之下
pub struct CommandsHost<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub anchor:   Entity,
}

impl WeaponHost for CommandsHost<'_, '_, '_> {
    fn spawn_weapon(&mut self, descriptor: &WeaponDescriptor) -> Entity {
        self.commands
            .spawn((
                Name::new(descriptor.name.clone()),
                EquippedWeapon,
                SceneRoot(descriptor.visual.clone()),
                Visibility::Hidden,
                ChildOf(self.anchor),
            ))
            .id()
    }

    fn strip_incidental(&mut self, instance: Entity) {
        // 实例由场景新生成，通常没有 WeaponPickup，此处移除为空操作
        self.commands.entity(instance).remove::<WeaponPickup>();
    }

    fn mount(&mut self, instance: Entity, pose: &MountPose) {
        self.commands
            .entity(instance)
            .insert((pose.to_transform(), WeaponPose::from(*pose)));
    }

    fn set_visible(&mut self, instance: Entity, visible: bool) {
        let visibility = if visible { Visibility::Inherited } else { Visibility::Hidden };
        self.commands.entity(instance).insert(visibility);
    }
}

/// Q / Tab 循环切换，1-3 直选
pub fn weapon_switch_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut writer: EventWriter<SwitchWeaponEvent>,
) {
    if keys.just_pressed(KeyCode::KeyQ) {
        writer.write(SwitchWeaponEvent::Previous);
    } else if keys.just_pressed(KeyCode::Tab) {
        writer.write(SwitchWeaponEvent::Next);
    }

    const HOTKEYS: [KeyCode; 3] = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3];
    if let Some(slot) = HOTKEYS.iter().position(|k| keys.just_pressed(*k)) {
        writer.write(SwitchWeaponEvent::Select(slot));
    }
}

/// 把切换请求应用到玩家武器栏
pub fn apply_weapon_switch(
    mut commands: Commands,
    mut ev_switch: EventReader<SwitchWeaponEvent>,
    mut stores: Query<(Entity, &mut InventoryStore)>,
    mut log_event: EventWriter<LogEvent>,
) {
    let Ok((anchor, mut store)) = stores.single_mut() else {
        ev_switch.clear();
        return;
    };

    for ev in ev_switch.read() {
        let before = store.active_index();
        let mut host = CommandsHost { commands: &mut commands, anchor };
        match *ev {
            SwitchWeaponEvent::Next => store.next(&mut host),
            SwitchWeaponEvent::Previous => store.previous(&mut host),
            SwitchWeaponEvent::Select(slot) => store.select_by_position(slot, &mut host),
        }

        if store.active_index() != before {
            if let Some(active) = store.active_descriptor() {
                log_event.write(LogEvent(format!("Switched to {}", active.name)));
            }
        }
    }
}

/// 处理拾取 / 发放：交给对应武器栏
pub fn acquire_weapons(
    mut commands: Commands,
    mut ev_acquire: EventReader<AcquireWeaponEvent>,
    mut stores: Query<&mut InventoryStore>,
    mut log_event: EventWriter<LogEvent>,
) {
    for ev in ev_acquire.read() {
        let Ok(mut store) = stores.get_mut(ev.store) else {
            warn!("实体 {} 上没有武器栏", ev.store);
            continue;
        };

        let name = ev.descriptor.name.clone();
        let mut host = CommandsHost { commands: &mut commands, anchor: ev.store };
        if store.try_acquire(ev.descriptor.clone(), &mut host) {
            info!("获得 {name}，共 {} 把武器", store.len());
            log_event.write(LogEvent(format!("{name} added to slot {}", store.len())));
        } else {
            log_event.write(LogEvent(format!("You already have {name}!")));
        }
    }
}

/// 处理 CLI 的 give：查武器表，转成 AcquireWeaponEvent
pub fn give_weapon(
    mut ev_give: EventReader<GiveWeaponEvent>,
    mut ev_acquire: EventWriter<AcquireWeaponEvent>,
    stores: Query<Entity, With<InventoryStore>>,
    weapon_assets: Res<WeaponAssets>,
    catalogs: Res<Assets<WeaponCatalog>>,
    asset_server: Res<AssetServer>,
) {
    let Some(catalog) = weapon_assets.catalog(&catalogs) else {
        ev_give.clear();
        return;
    };
    let Ok(store) = stores.single() else {
        ev_give.clear();
        return;
    };

    for ev in ev_give.read() {
        if let Some(entry) = catalog.find(&ev.id) {
            ev_acquire.write(AcquireWeaponEvent {
                store,
                descriptor: WeaponDescriptor::new(
                    entry.name.clone(),
                    asset_server.load(entry.scene.clone()),
                ),
            });
        } else {
            warn!("不存在武器 ID {}", ev.id);
        }
    }
}

/// 打印武器栏内容
pub fn print_inventory(
    mut ev_list: EventReader<ListWeaponsEvent>,
    stores: Query<&InventoryStore>,
    mut log_event: EventWriter<LogEvent>,
) {
    if ev_list.is_empty() {
        return;
    }
    ev_list.clear();

    let Ok(store) = stores.single() else {
        return;
    };

    log_event.write(LogEvent(format!("Weapons: {}", store.len())));
    if store.is_empty() {
        log_event.write(LogEvent("  (empty)".into()));
    }
    for (idx, slot) in store.slots().iter().enumerate() {
        let prefix = if slot.visible { ">" } else { " " };
        log_event.write(LogEvent(format!("{prefix} [{}] {}", idx + 1, slot.descriptor.name)));
    }
}
