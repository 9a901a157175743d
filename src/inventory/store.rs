//! 武器栏状态机：有序槽位 + 当前激活下标
//!
//! 所有操作都是全函数：越界下标、重名武器、空武器栏上的切换一律静默忽略，
//! 不返回错误，每帧轮询的输入代码可以直接调用。

use bevy::prelude::*;

use super::components::{MountPose, WeaponDescriptor};

/// 引擎侧能力：生成、清理、挂载、显隐
pub trait WeaponHost {
    /// 生成一个可见实例并挂到武器挂点下
    fn spawn_weapon(&mut self, descriptor: &WeaponDescriptor) -> Entity;
    /// 去掉实例上拾取 / 物理相关的组件
    fn strip_incidental(&mut self, instance: Entity);
    fn mount(&mut self, instance: Entity, pose: &MountPose);
    fn set_visible(&mut self, instance: Entity, visible: bool);
}

#[derive(Debug, Clone)]
pub struct InventorySlot {
    pub descriptor: WeaponDescriptor,
    pub instance:   Entity,
    pub visible:    bool,
}

/// 玩家武器栏，挂在武器挂点（相机）实体上
#[derive(Component, Debug, Default)]
pub struct InventoryStore {
    slots:  Vec<InventorySlot>,
    active: Option<usize>,
    mount:  MountPose,
}

impl InventoryStore {
    pub fn new(mount: MountPose) -> Self {
        Self {
            slots: Vec::new(),
            active: None,
            mount,
        }
    }

    /// 拾取武器；已拥有同名武器或名称为空时返回 false
    pub fn try_acquire(&mut self, descriptor: WeaponDescriptor, host: &mut impl WeaponHost) -> bool {
        if descriptor.name.is_empty() || self.contains(&descriptor.name) {
            return false;
        }

        let instance = host.spawn_weapon(&descriptor);
        host.strip_incidental(instance);
        host.mount(instance, &self.mount);

        debug!("{} 加入武器栏，实例 {instance}", descriptor.name);
        self.slots.push(InventorySlot {
            descriptor,
            instance,
            visible: false,
        });

        // 第一把武器直接装备
        if self.slots.len() == 1 {
            self.active = Some(0);
        }

        self.refresh_visibility(host);
        true
    }

    pub fn set_active(&mut self, index: usize, host: &mut impl WeaponHost) {
        if index >= self.slots.len() {
            return;
        }
        self.active = Some(index);
        self.refresh_visibility(host);
    }

    pub fn next(&mut self, host: &mut impl WeaponHost) {
        let count = self.slots.len();
        if count == 0 {
            return;
        }
        let current = self.active.unwrap_or(0);
        self.set_active((current + 1) % count, host);
    }

    pub fn previous(&mut self, host: &mut impl WeaponHost) {
        let count = self.slots.len();
        if count == 0 {
            return;
        }
        let current = self.active.unwrap_or(0);
        self.set_active((current + count - 1) % count, host);
    }

    /// 数字键直选（0 起）
    pub fn select_by_position(&mut self, slot: usize, host: &mut impl WeaponHost) {
        self.set_active(slot, host);
    }

    pub fn active_descriptor(&self) -> Option<&WeaponDescriptor> {
        self.active_slot().map(|s| &s.descriptor)
    }

    pub fn active_instance(&self) -> Option<Entity> {
        self.active_slot().map(|s| s.instance)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.iter().any(|s| s.descriptor.name == name)
    }

    pub fn mount_pose(&self) -> &MountPose {
        &self.mount
    }

    fn active_slot(&self) -> Option<&InventorySlot> {
        self.active.and_then(|i| self.slots.get(i))
    }

    /// 只有激活槽位可见
    fn refresh_visibility(&mut self, host: &mut impl WeaponHost) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            let visible = Some(i) == self.active;
            slot.visible = visible;
            host.set_visible(slot.instance, visible);
        }
    }
}
