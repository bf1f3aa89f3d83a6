use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

use super::{CellSymbols, ConfigManager, FileContentConfigProvider, RenderMode, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_default_config_path))
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    #[serde(default)]
    pub render_mode: RenderMode,
    #[serde(default)]
    pub symbols: CellSymbols,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.symbols.validate()
    }
}
