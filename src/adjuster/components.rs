use bevy::prelude::*;
use serde_derive::Serialize;

use crate::core::config::AdjusterSettings;
use crate::inventory::components::WeaponPose;

/// 缩小后的最小缩放
pub const MIN_SCALE: f32 = 0.1;

/// 本帧按住的调节键
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AdjustInput {
    /// 每个分量取 -1 / 0 / 1
    pub translate: Vec3,
    pub rotate:    Vec3,
    pub grow:      bool,
    pub shrink:    bool,
}

impl AdjustInput {
    pub fn from_keys(keys: &ButtonInput<KeyCode>) -> Self {
        let axis = |neg: KeyCode, pos: KeyCode| {
            let mut v = 0.0;
            if keys.pressed(pos) {
                v += 1.0;
            }
            if keys.pressed(neg) {
                v -= 1.0;
            }
            v
        };

        Self {
            translate: Vec3::new(
                axis(KeyCode::ArrowLeft, KeyCode::ArrowRight),
                axis(KeyCode::ArrowDown, KeyCode::ArrowUp),
                axis(KeyCode::PageDown, KeyCode::PageUp),
            ),
            // 小键盘 8 抬枪口（x 减小）
            rotate: Vec3::new(
                axis(KeyCode::Numpad8, KeyCode::Numpad2),
                axis(KeyCode::Numpad4, KeyCode::Numpad6),
                axis(KeyCode::Numpad7, KeyCode::Numpad9),
            ),
            grow:   keys.pressed(KeyCode::Equal),
            shrink: keys.pressed(KeyCode::Minus),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.translate == Vec3::ZERO && self.rotate == Vec3::ZERO && !self.grow && !self.shrink
    }

    /// 按速度和帧时长修改位姿；没有按键时返回 false
    pub fn apply(&self, pose: &mut WeaponPose, settings: &AdjusterSettings, dt: f32) -> bool {
        if self.is_idle() {
            return false;
        }

        pose.position += self.translate * settings.position_speed * dt;
        pose.rotation_degrees += self.rotate * settings.rotation_speed * dt;

        if self.grow {
            pose.scale += Vec3::ONE * settings.scale_speed * dt;
        }
        if self.shrink {
            pose.scale -= Vec3::ONE * settings.scale_speed * dt;
            pose.scale = pose.scale.max(Vec3::splat(MIN_SCALE));
        }
        true
    }
}

/// P 键打印用的快照
#[derive(Debug, Serialize)]
pub struct PoseSnapshot {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale:    [f32; 3],
}

impl From<&WeaponPose> for PoseSnapshot {
    fn from(pose: &WeaponPose) -> Self {
        Self {
            position: pose.position.to_array(),
            rotation: pose.rotation_degrees.to_array(),
            scale:    pose.scale.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::components::MountPose;

    fn start_pose() -> WeaponPose {
        WeaponPose {
            position:         Vec3::ZERO,
            rotation_degrees: Vec3::ZERO,
            scale:            Vec3::ONE,
        }
    }

    fn held(keys: &[KeyCode]) -> AdjustInput {
        let mut input = ButtonInput::<KeyCode>::default();
        for key in keys {
            input.press(*key);
        }
        AdjustInput::from_keys(&input)
    }

    #[test]
    fn idle_input_leaves_pose_alone() {
        let mut pose = start_pose();
        assert!(!held(&[]).apply(&mut pose, &AdjusterSettings::default(), 0.5));
        assert_eq!(pose, start_pose());
    }

    #[test]
    fn arrows_and_page_keys_move_by_speed_times_dt() {
        let mut pose = start_pose();
        let input = held(&[KeyCode::ArrowUp, KeyCode::ArrowLeft, KeyCode::PageUp]);

        assert!(input.apply(&mut pose, &AdjusterSettings::default(), 0.5));
        assert_eq!(pose.position, Vec3::new(-0.5, 0.5, 0.5));
    }

    #[test]
    fn numpad_rotates_each_axis() {
        let settings = AdjusterSettings::default();
        let mut pose = start_pose();

        held(&[KeyCode::Numpad8, KeyCode::Numpad6, KeyCode::Numpad9]).apply(&mut pose, &settings, 0.1);

        assert!(pose.rotation_degrees.abs_diff_eq(Vec3::new(-5.0, 5.0, 5.0), 1e-4));
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut pose = start_pose();
        held(&[KeyCode::ArrowUp, KeyCode::ArrowDown]).apply(&mut pose, &AdjusterSettings::default(), 1.0);
        assert_eq!(pose.position, Vec3::ZERO);
    }

    #[test]
    fn shrinking_stops_at_minimum_scale() {
        let mut pose = start_pose();
        let shrink = held(&[KeyCode::Minus]);

        for _ in 0..10 {
            shrink.apply(&mut pose, &AdjusterSettings::default(), 1.0);
        }
        assert_eq!(pose.scale, Vec3::splat(MIN_SCALE));

        held(&[KeyCode::Equal]).apply(&mut pose, &AdjusterSettings::default(), 1.0);
        assert!(pose.scale.abs_diff_eq(Vec3::splat(0.6), 1e-6));
    }

    #[test]
    fn snapshot_serializes_as_arrays() {
        let pose = WeaponPose::from(MountPose::default());
        let json = serde_json::to_value(PoseSnapshot::from(&pose)).unwrap();
        assert_eq!(json["position"], serde_json::json!([0.5, -0.5, 1.0]));
        assert_eq!(json["scale"].as_array().map(Vec::len), Some(3));
    }
}
