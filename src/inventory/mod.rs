pub mod components;
pub mod events;
pub mod store;
pub mod systems;

use bevy::prelude::*;
use crate::core::states::AppState;
use events::*;
use systems::*;

pub use store::InventoryStore;

/// 每帧的武器相关系统顺序：先读输入，再改武器栏，最后调节位姿
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum WeaponSet {
    Input,
    Apply,
    Tune,
}

pub struct InventoryPlugin;
impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_event::<SwitchWeaponEvent>()
            .add_event::<AcquireWeaponEvent>()
            .add_event::<GiveWeaponEvent>()
            .add_event::<ListWeaponsEvent>()
            .configure_sets(
                Update,
                (WeaponSet::Input, WeaponSet::Apply, WeaponSet::Tune)
                    .chain()
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(
                Update,
                (
                    (weapon_switch_input, give_weapon).in_set(WeaponSet::Input),
                    (acquire_weapons, apply_weapon_switch, print_inventory)
                        .chain()
                        .in_set(WeaponSet::Apply),
                ),
            );
    }
}
