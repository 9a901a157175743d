use super::components::*;
use crate::core::config::GameConfig;
use crate::data::{WeaponAssets, schema::WeaponCatalog};
use crate::inventory::{InventoryStore, components::MountPose};
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

/// 生成玩家、相机挂点、灯光与地面
pub fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    weapon_assets: Res<WeaponAssets>,
    catalogs: Res<Assets<WeaponCatalog>>,
) {
    let mount: MountPose = weapon_assets
        .catalog(&catalogs)
        .map(|c| c.mount.clone().into())
        .unwrap_or_default();

    commands
        .spawn((Name::new("Player"), Player, Transform::default(), Visibility::default()))
        .with_children(|parent| {
            parent.spawn((
                Name::new("PlayerCamera"),
                Camera3d::default(),
                Transform::from_xyz(0.0, EYE_HEIGHT, 0.0),
                PlayerCamera::default(),
                InventoryStore::new(mount),
            ));
        });

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(50.0, 50.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.35, 0.45, 0.35))),
    ));
}

/// WASD 在水平面移动
pub fn move_player(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut players: Query<&mut Transform, With<Player>>,
) {
    let Ok(mut transform) = players.single_mut() else {
        return;
    };

    let forward = *transform.forward();
    let right = *transform.right();
    let mut direction = Vec3::ZERO;
    if keys.pressed(KeyCode::KeyW) {
        direction += forward;
    }
    if keys.pressed(KeyCode::KeyS) {
        direction -= forward;
    }
    if keys.pressed(KeyCode::KeyD) {
        direction += right;
    }
    if keys.pressed(KeyCode::KeyA) {
        direction -= right;
    }
    direction.y = 0.0;

    transform.translation +=
        direction.normalize_or_zero() * config.player.move_speed * time.delta_secs();
}

/// 鼠标：玩家左右转，相机上下看
pub fn look_around(
    motion: Res<AccumulatedMouseMotion>,
    config: Res<GameConfig>,
    mut players: Query<&mut Transform, (With<Player>, Without<PlayerCamera>)>,
    mut cameras: Query<(&mut Transform, &mut PlayerCamera), Without<Player>>,
) {
    let delta = motion.delta;
    if delta == Vec2::ZERO {
        return;
    }
    let sensitivity = config.player.mouse_sensitivity;

    if let Ok(mut player) = players.single_mut() {
        player.rotate_y(-delta.x * sensitivity);
    }
    if let Ok((mut transform, mut camera)) = cameras.single_mut() {
        let pitch = camera.add_pitch(-delta.y * sensitivity);
        transform.rotation = Quat::from_rotation_x(pitch);
    }
}
