pub mod components;
mod systems;

use crate::core::config::GameConfig;
use crate::inventory::WeaponSet;
use bevy::prelude::*;
use systems::*;

/// 武器位姿调节工具，配置里 adjuster.enabled = false 可关闭
pub struct AdjusterPlugin;
impl Plugin for AdjusterPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            adjust_active_weapon
                .in_set(WeaponSet::Tune)
                .run_if(|config: Res<GameConfig>| config.adjuster.enabled),
        );
    }
}
