use std::path::Path;

use anyhow::Context;
use bevy::prelude::*;
use serde_derive::Deserialize;

/// 默认配置文件位置（相对工作目录）
pub const CONFIG_PATH: &str = "config/game.toml";

/// 全局配置，全部字段都有默认值，配置文件缺失时直接用默认
#[derive(Resource, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// 武器表在 assets/ 下的路径
    pub catalog_path: String,
    pub player: PlayerSettings,
    pub adjuster: AdjusterSettings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            catalog_path: "data/weapons.ron".into(),
            player: PlayerSettings::default(),
            adjuster: AdjusterSettings::default(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerSettings {
    pub move_speed: f32,
    /// 每像素鼠标位移对应的弧度
    pub mouse_sensitivity: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            move_speed: 4.0,
            mouse_sensitivity: 0.002,
        }
    }
}

/// 武器位置调节器的速度（每秒）
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AdjusterSettings {
    pub enabled: bool,
    pub position_speed: f32,
    /// 度 / 秒
    pub rotation_speed: f32,
    pub scale_speed: f32,
}

impl Default for AdjusterSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            position_speed: 1.0,
            rotation_speed: 50.0,
            scale_speed: 0.5,
        }
    }
}

impl GameConfig {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid game config")
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("while parsing {}", path.display()))
    }

    /// 读取失败时打印警告并回退到默认值
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("未找到 {}，使用默认配置", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("配置加载失败，使用默认配置: {err:#}");
                Self::default()
            }
        }
    }
}
