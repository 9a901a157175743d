use bevy::math::EulerRot;
use bevy::prelude::*;
use crate::data::schema::MountEntry;

/// 武器描述：名称即身份，visual 为要生成的场景
#[derive(Debug, Clone)]
pub struct WeaponDescriptor {
    pub name:   String,
    pub visual: Handle<Scene>,
}

impl WeaponDescriptor {
    pub fn new(name: impl Into<String>, visual: Handle<Scene>) -> Self {
        Self { name: name.into(), visual }
    }
}

/// 同名即同一把武器
impl PartialEq for WeaponDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for WeaponDescriptor {}

/// 新武器在挂点下的本地位姿（旋转为欧拉角，单位度）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountPose {
    pub translation:      Vec3,
    pub rotation_degrees: Vec3,
    pub scale:            f32,
}

impl Default for MountPose {
    fn default() -> Self {
        MountEntry::default().into()
    }
}

impl From<MountEntry> for MountPose {
    fn from(entry: MountEntry) -> Self {
        Self {
            translation:      Vec3::from_array(entry.position),
            rotation_degrees: Vec3::from_array(entry.rotation),
            scale:            entry.scale,
        }
    }
}

impl MountPose {
    pub fn to_transform(&self) -> Transform {
        WeaponPose::from(*self).to_transform()
    }
}

/// 武器实例当前的本地位姿，调节器直接改它，再同步到 Transform
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct WeaponPose {
    pub position:         Vec3,
    pub rotation_degrees: Vec3,
    pub scale:            Vec3,
}

impl From<MountPose> for WeaponPose {
    fn from(mount: MountPose) -> Self {
        Self {
            position:         mount.translation,
            rotation_degrees: mount.rotation_degrees,
            scale:            Vec3::splat(mount.scale),
        }
    }
}

impl WeaponPose {
    /// 欧拉角按 Z → X → Y 的顺序作用
    pub fn to_transform(&self) -> Transform {
        let r = self.rotation_degrees;
        Transform {
            translation: self.position,
            rotation:    Quat::from_euler(
                EulerRot::YXZ,
                r.y.to_radians(),
                r.x.to_radians(),
                r.z.to_radians(),
            ),
            scale:       self.scale,
        }
    }
}

/// 挂在武器实例上的标记
#[derive(Component, Debug, Default)]
pub struct EquippedWeapon;
