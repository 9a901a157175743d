//! 文字 CLI：读取 stdin → 解析命令 → 执行并打印

use bevy::app::AppExit;
use bevy::prelude::*;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::core::{events::LogEvent, states::AppState};
use crate::data::{WeaponAssets, schema::WeaponCatalog};
use crate::inventory::InventoryStore;
use crate::inventory::events::{GiveWeaponEvent, ListWeaponsEvent, SwitchWeaponEvent};

static CLI_BUFFER: Lazy<Arc<Mutex<VecDeque<String>>>> =
    Lazy::new(|| Arc::new(Mutex::new(VecDeque::new())));

/// 插件入口
pub struct DebugCliPlugin;
impl Plugin for DebugCliPlugin {
    fn build(&self, app: &mut App) {
        {
            let buffer = CLI_BUFFER.clone();
            std::thread::spawn(move || {
                use std::io::{self, BufRead};
                let stdin = io::stdin();
                for line in stdin.lock().lines().map_while(Result::ok) {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match buffer.lock() {
                        Ok(mut buf) => buf.push_back(line.to_string()),
                        Err(_) => break,
                    }
                }
            });
        }
        app
            // 事件：原始输入行
            .add_event::<CliLine>()
            // 每帧从 buffer 取出所有命令行写入事件
            .add_systems(Update, read_stdin)
            // 仅在 InGame 处理命令
            .add_systems(
                Update,
                execute_cli_commands
                    .after(read_stdin)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

/* ---------------------------- 事件与枚举 ---------------------------- */

/// 终端敲的一整行
#[derive(Event)]
struct CliLine(String);

/// 我们支持的命令
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Status,
    Exit,
    Weapons(Option<String>), // None=全部；Some(token)=按 id/uuid/name 查询
    Give(String),
    Inventory,
    Next,
    Prev,
    /// 0 起；输入无效时为 None，静默忽略
    Select(Option<usize>),
    Unsupported(String),
}

/* ---------------------------- 读取 stdin ---------------------------- */

fn read_stdin(mut writer: EventWriter<CliLine>) {
    let Ok(mut buffer) = CLI_BUFFER.lock() else {
        return;
    };
    while let Some(line) = buffer.pop_front() {
        writer.write(CliLine(line));
    }
}

/* ---------------------------- 命令执行 ---------------------------- */

#[allow(clippy::too_many_arguments)]
fn execute_cli_commands(
    mut line_reader: EventReader<CliLine>,
    mut app_exit: EventWriter<AppExit>,
    mut log: EventWriter<LogEvent>,
    state: Res<State<AppState>>,
    weapon_assets: Res<WeaponAssets>,
    catalogs: Res<Assets<WeaponCatalog>>,
    stores: Query<&InventoryStore>,
    mut ev_give: EventWriter<GiveWeaponEvent>,
    mut ev_list: EventWriter<ListWeaponsEvent>,
    mut ev_switch: EventWriter<SwitchWeaponEvent>,
) {
    for CliLine(input) in line_reader.read() {
        match parse_command(input) {
            Command::Help => {
                log.write(LogEvent(
                    "命令列表:
  help                   查看帮助
  status                 查看当前状态
  exit / quit            退出程序
  weapons                列出武器表
  weapons <token>        用 id / uuid / 名称 查询单把武器
  give <id>              直接获得武器
  inventory              查看武器栏
  next / prev            切换武器
  select <n>             选择第 n 把武器（1 起）
  ".into()));
            }

            Command::Status => {
                let cnt = weapon_assets.catalog(&catalogs).map_or(0, |c| c.weapons.len());
                let active = stores
                    .single()
                    .ok()
                    .and_then(|s| s.active_descriptor())
                    .map_or("-".to_string(), |d| d.name.clone());
                log.write(LogEvent(format!(
                    "State: {:?}, Weapons Loaded: {}, Active: {}",
                    state.get(),
                    cnt,
                    active
                )));
            }

            Command::Exit => {
                log.write(LogEvent("Bye~".into()));
                app_exit.write(AppExit::Success);
            }

            Command::Weapons(token) => {
                let Some(catalog) = weapon_assets.catalog(&catalogs) else {
                    continue;
                };
                match token {
                    None => {
                        for entry in &catalog.weapons {
                            let uuid = uuid_from_id(&entry.id);
                            log.write(LogEvent(format!(
                                "{} | {} | {}",
                                uuid, entry.id, entry.name
                            )));
                        }
                    }
                    Some(t) => {
                        let t_low = t.to_lowercase();
                        let found = catalog.find(&t_low).or_else(|| {
                            catalog
                                .weapons
                                .iter()
                                .find(|e| uuid_from_id(&e.id).to_string() == t_low)
                        });
                        if let Some(e) = found {
                            log.write(LogEvent(format!(
                                "==================================================
UUID  : {}
ID    : {}
Name  : {}
Scene : {}
==================================================",
                                uuid_from_id(&e.id), e.id, e.name, e.scene
                            )));
                        } else {
                            log.write(LogEvent("未找到匹配武器".into()));
                        }
                    }
                }
            }

            Command::Give(id) => {
                ev_give.write(GiveWeaponEvent { id });
            }

            Command::Inventory => {
                ev_list.write(ListWeaponsEvent);
            }

            Command::Next => {
                ev_switch.write(SwitchWeaponEvent::Next);
            }

            Command::Prev => {
                ev_switch.write(SwitchWeaponEvent::Previous);
            }

            Command::Select(slot) => {
                if let Some(slot) = slot {
                    ev_switch.write(SwitchWeaponEvent::Select(slot));
                }
            }

            Command::Unsupported(cmd) => {
                log.write(LogEvent(format!("不支持的命令: {cmd}")));
            }
        }
    }
}

/* ---------------------------- 工具函数 ---------------------------- */

fn parse_command(input: &str) -> Command {
    let mut parts = input.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_lowercase();
    match cmd.as_str() {
        "help" | "h" | "?" => Command::Help,
        "status" | "s" => Command::Status,
        "exit" | "quit" => Command::Exit,
        "weapons" | "weapon" | "w" => {
            let token = parts.next().map(|s| s.to_string());
            Command::Weapons(token)
        }
        "give" => Command::Give(parts.collect::<Vec<_>>().join(" ")),
        "inventory" | "inv" | "i" => Command::Inventory,
        "next" | "tab" => Command::Next,
        "prev" | "previous" | "q" => Command::Prev,
        "select" => {
            let slot = parts
                .next()
                .and_then(|s| s.parse::<usize>().ok())
                .and_then(|n| n.checked_sub(1));
            Command::Select(slot)
        }
        other => Command::Unsupported(other.into()),
    }
}

fn uuid_from_id(id: &str) -> Uuid {
    // 用固定 namespace + id 字节生成版本 5 UUID，保证可重复得到同一值
    Uuid::new_v5(&Uuid::NAMESPACE_OID, id.as_bytes())
}
