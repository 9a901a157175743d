pub mod components;
pub mod systems;

use crate::core::states::AppState;
use crate::inventory::WeaponSet;
use bevy::prelude::*;
use systems::*;

pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app
            // 在游戏开始时生成玩家
            .add_systems(OnEnter(AppState::InGame), spawn_player)
            // 移动要在拾取距离检测之前
            .add_systems(
                Update,
                (move_player, look_around)
                    .before(WeaponSet::Input)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
