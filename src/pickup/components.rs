use bevy::prelude::*;
use crate::inventory::components::WeaponDescriptor;

/// 默认拾取距离（米）
pub const DEFAULT_PICKUP_DISTANCE: f32 = 3.0;

/// 场景中的武器拾取点
///
/// 玩家进入 `pickup_distance` 范围内并按下拾取键时触发一次，
/// 之后永久失效（不论武器栏是否因重名拒收）。
#[derive(Component, Debug, Clone)]
pub struct WeaponPickup {
    pub descriptor:      WeaponDescriptor,
    pub pickup_distance: f32,
    in_range: bool,
    consumed: bool,
}

impl WeaponPickup {
    pub fn new(descriptor: WeaponDescriptor, pickup_distance: f32) -> Self {
        Self {
            descriptor,
            pickup_distance,
            in_range: false,
            consumed: false,
        }
    }

    /// 更新与玩家的距离；返回本帧是否刚进入范围
    pub fn observe(&mut self, distance: f32) -> bool {
        let was_in_range = self.in_range;
        self.in_range = distance <= self.pickup_distance;
        self.in_range && !was_in_range
    }

    /// `pressed` 必须是边沿信号（本帧刚按下）
    pub fn try_trigger(&mut self, pressed: bool) -> Option<WeaponDescriptor> {
        if self.consumed || !self.in_range || !pressed {
            return None;
        }
        self.consumed = true;
        Some(self.descriptor.clone())
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rifle_pickup() -> WeaponPickup {
        WeaponPickup::new(WeaponDescriptor::new("Rifle", Handle::default()), DEFAULT_PICKUP_DISTANCE)
    }

    #[test]
    fn entering_range_is_reported_once() {
        let mut pickup = rifle_pickup();
        assert!(!pickup.observe(5.0));
        assert!(pickup.observe(3.0));
        assert!(!pickup.observe(2.0));
        assert!(!pickup.observe(4.0));
        assert!(pickup.observe(1.0));
    }

    #[test]
    fn out_of_range_press_does_nothing() {
        let mut pickup = rifle_pickup();
        pickup.observe(3.5);
        assert!(pickup.try_trigger(true).is_none());
        assert!(!pickup.is_consumed());
    }

    #[test]
    fn fires_once_then_stays_consumed() {
        let mut pickup = rifle_pickup();
        pickup.observe(0.5);

        assert!(pickup.try_trigger(false).is_none());
        let fired = pickup.try_trigger(true).expect("in range and pressed");
        assert_eq!(fired.name, "Rifle");
        assert!(pickup.is_consumed());

        assert!(pickup.try_trigger(true).is_none());
    }
}
