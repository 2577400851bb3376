use connect_engine::GameConfig;
use connect_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use connect_engine::error::ConfigError;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "connect_console_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub type ConsoleConfigManager = ConfigManager<FileContentConfigProvider, ConsoleConfig, YamlConfigSerializer>;

pub fn get_config_manager() -> ConsoleConfigManager {
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ConsoleConfig {
    pub game: GameConfig,
    #[serde(default = "default_log_prefix")]
    pub log_prefix: String,
}

fn default_log_prefix() -> String {
    "Console".to_string()
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()?;
        if self.log_prefix.trim().is_empty() {
            return Err(ConfigError::Invalid("log prefix cannot be blank".to_string()));
        }
        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::connect_four(),
            log_prefix: default_log_prefix(),
        }
    }
}
