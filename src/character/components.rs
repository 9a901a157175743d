use bevy::prelude::*;

/// 眼睛高度，相机（武器挂点）离玩家原点的距离
pub const EYE_HEIGHT: f32 = 1.6;

/// 俯仰角上限（弧度）
pub const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// 玩家标记组件
#[derive(Component)]
pub struct Player;

/// 玩家相机：同时是武器挂点，InventoryStore 挂在这里
#[derive(Component, Debug, Default)]
pub struct PlayerCamera {
    pub pitch: f32,
}

impl PlayerCamera {
    /// 累加俯仰并夹在 ±89° 内，返回新的俯仰角
    pub fn add_pitch(&mut self, delta: f32) -> f32 {
        self.pitch = (self.pitch + delta).clamp(-MAX_PITCH, MAX_PITCH);
        self.pitch
    }
}
