use bevy::prelude::*;
use super::components::WeaponDescriptor;

/// 切换武器请求（键盘 / CLI）
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchWeaponEvent {
    Next,
    Previous,
    /// 0 起的槽位
    Select(usize),
}

/// 把武器交给某个武器栏
#[derive(Event, Debug, Clone)]
pub struct AcquireWeaponEvent {
    /// 挂着 InventoryStore 的实体
    pub store:      Entity,
    pub descriptor: WeaponDescriptor,
}

/// CLI 的 give：按武器表 id / 名称发放
#[derive(Event)]
pub struct GiveWeaponEvent {
    pub id: String,
}

#[derive(Event)]
pub struct ListWeaponsEvent;   // 让 CLI 请求打印武器栏
