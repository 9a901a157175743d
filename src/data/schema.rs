use bevy::asset::Asset;
use bevy::reflect::TypePath;
use serde_derive::Deserialize;

/// 武器静态表条目
#[derive(Debug, Clone, Deserialize)]
pub struct WeaponEntry {
    pub id:    String,
    pub name:  String,
    /// 场景资源路径，例如 "models/revolver.glb#Scene0"
    pub scene: String,
}

/// 挂点上的默认位姿；rotation 为欧拉角（度）
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct MountEntry {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale:    f32,
}

impl Default for MountEntry {
    fn default() -> Self {
        Self {
            position: [0.5, -0.5, 1.0],
            rotation: [1.25, 177.77, 1.20],
            scale:    1.02,
        }
    }
}

/// 场景里摆放的拾取点
#[derive(Debug, Clone, Deserialize)]
pub struct PickupEntry {
    /// 对应 WeaponEntry::id
    pub weapon:   String,
    pub position: [f32; 3],
    #[serde(default = "default_pickup_distance")]
    pub pickup_distance: f32,
}

fn default_pickup_distance() -> f32 {
    crate::pickup::components::DEFAULT_PICKUP_DISTANCE
}

#[derive(Asset, TypePath, Deserialize, Debug)]
pub struct WeaponCatalog {
    #[serde(default)]
    pub mount:   MountEntry,
    pub weapons: Vec<WeaponEntry>,
    #[serde(default)]
    pub pickups: Vec<PickupEntry>,
}

impl WeaponCatalog {
    /// 按 id 或名称查找（忽略大小写）
    pub fn find(&self, token: &str) -> Option<&WeaponEntry> {
        self.weapons
            .iter()
            .find(|e| e.id.eq_ignore_ascii_case(token) || e.name.eq_ignore_ascii_case(token))
    }
}
