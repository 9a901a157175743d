pub mod schema;
pub mod loader;

use bevy::asset::LoadState;
use bevy::prelude::*;
use schema::WeaponCatalog;
use crate::core::{config::GameConfig, states::AppState};

// --------------------------- 资源 ---------------------------
#[derive(Resource, Default)]
pub struct WeaponAssets {
    pub handle: Option<Handle<WeaponCatalog>>,
}

impl WeaponAssets {
    /// 已加载完成的武器表
    pub fn catalog<'a>(&self, catalogs: &'a Assets<WeaponCatalog>) -> Option<&'a WeaponCatalog> {
        self.handle.as_ref().and_then(|h| catalogs.get(h))
    }
}

// --------------------------- 插件 ---------------------------
pub struct DataPlugin;
impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app
            // 注册资产类型 & Loader
            .init_asset::<WeaponCatalog>()
            .register_asset_loader(loader::RonCatalogLoader)
            .init_resource::<WeaponAssets>()
            // Loading 流程
            .add_systems(OnEnter(AppState::Loading), start_loading)
            .add_systems(
                Update,
                check_loaded.run_if(in_state(AppState::Loading)),
            );
    }
}

// --------------------------- 系统 ---------------------------
fn start_loading(
    mut weapon_assets: ResMut<WeaponAssets>,
    asset_server: Res<AssetServer>,
    config: Res<GameConfig>,
) {
    let handle: Handle<WeaponCatalog> = asset_server.load(config.catalog_path.clone());
    weapon_assets.handle = Some(handle);
}

fn check_loaded(
    mut next: ResMut<NextState<AppState>>,
    mut weapon_assets: ResMut<WeaponAssets>,
    catalogs: Res<Assets<WeaponCatalog>>,
    asset_server: Res<AssetServer>,
) {
    let Some(handle) = weapon_assets.handle.clone() else {
        return;
    };

    if let Some(catalog) = catalogs.get(&handle) {
        info!(
            "✔ Weapons loaded: {} ({} pickups)",
            catalog.weapons.len(),
            catalog.pickups.len()
        );
        next.set(AppState::InGame);
    } else if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle.id()) {
        // 加载失败时停在 Loading，只报一次
        error!("✘ 武器表加载失败: {err}");
        weapon_assets.handle = None;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// 第二个拾取点引用了表里没有的武器
    pub(crate) const SAMPLE_CATALOG: &str = r#"(
        weapons: [
            (id: "revolver", name: "Revolver", scene: "models/revolver.glb#Scene0"),
            (id: "rifle",    name: "Rifle",    scene: "models/rifle.glb#Scene0"),
        ],
        pickups: [
            (weapon: "revolver", position: (2.0, 0.5, -4.0)),
            (weapon: "bazooka",  position: (0.0, 0.5, -6.0)),
            (weapon: "rifle",    position: (-3.0, 0.5, -8.0)),
        ],
    )"#;

    /// 带 AssetServer 的最小 App，武器表已放进 Assets 并由 WeaponAssets 指向
    pub(crate) fn catalog_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Scene>()
            .init_asset::<WeaponCatalog>();

        let catalog: WeaponCatalog = ron::de::from_str(SAMPLE_CATALOG).unwrap();
        let handle = app
            .world_mut()
            .resource_mut::<Assets<WeaponCatalog>>()
            .add(catalog);
        app.insert_resource(WeaponAssets { handle: Some(handle) });
        app
    }

    #[test]
    fn catalog_app_exposes_the_loaded_catalog() {
        let app = catalog_app();
        let catalogs = app.world().resource::<Assets<WeaponCatalog>>();
        let catalog = app.world().resource::<WeaponAssets>().catalog(catalogs).unwrap();
        assert_eq!(catalog.weapons.len(), 2);
        assert_eq!(catalog.pickups.len(), 3);
    }
}
