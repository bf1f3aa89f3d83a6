mod config;
mod render_config;

pub(crate) use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use config::{get_config_manager, ClientConfig};
pub use render_config::{CellSymbols, RenderMode};
