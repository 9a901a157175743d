use super::components::*;
use crate::core::{config::GameConfig, events::LogEvent};
use crate::inventory::{InventoryStore, components::WeaponPose};
use bevy::prelude::*;

/// 实时调节当前武器的位置 / 旋转 / 缩放
///
/// 方向键、PgUp/PgDn 移动，小键盘 8/2/4/6/7/9 旋转，+/- 缩放，
/// P 打印当前数值，R 恢复挂点默认值。
pub fn adjust_active_weapon(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<GameConfig>,
    stores: Query<&InventoryStore>,
    mut weapons: Query<(&mut WeaponPose, &mut Transform)>,
    mut log_event: EventWriter<LogEvent>,
) {
    let Ok(store) = stores.single() else {
        return;
    };
    let Some(instance) = store.active_instance() else {
        return;
    };
    let Ok((mut pose, mut transform)) = weapons.get_mut(instance) else {
        return;
    };

    let input = AdjustInput::from_keys(&keys);
    if input.apply(&mut pose, &config.adjuster, time.delta_secs()) {
        *transform = pose.to_transform();
    }

    if keys.just_pressed(KeyCode::KeyP) {
        for line in describe_pose(&pose) {
            log_event.write(LogEvent(line));
        }
    }

    if keys.just_pressed(KeyCode::KeyR) {
        *pose = WeaponPose::from(*store.mount_pose());
        *transform = pose.to_transform();
        info!("武器位姿已恢复默认值");
    }
}

/// P 键输出：两位小数 + 一行 JSON，方便抄回武器表
pub fn describe_pose(pose: &WeaponPose) -> Vec<String> {
    let (p, r, s) = (pose.position, pose.rotation_degrees, pose.scale);
    let mut lines = vec![
        "=== CURRENT WEAPON VALUES ===".to_string(),
        format!("Position: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z),
        format!("Rotation: ({:.2}, {:.2}, {:.2})", r.x, r.y, r.z),
        format!("Scale: ({:.2}, {:.2}, {:.2})", s.x, s.y, s.z),
    ];
    match serde_json::to_string(&PoseSnapshot::from(pose)) {
        Ok(json) => lines.push(json),
        Err(err) => warn!("位姿序列化失败: {err}"),
    }
    lines.push("=============================".to_string());
    lines
}
