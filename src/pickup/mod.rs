pub mod components;
mod systems;

use crate::core::states::AppState;
use crate::inventory::WeaponSet;
use bevy::prelude::*;
use systems::*;

/// 场景中的武器拾取点
pub struct PickupPlugin;
impl Plugin for PickupPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InGame), spawn_pickups)
            .add_systems(Update, detect_pickups.in_set(WeaponSet::Input));
    }
}
