use engine::GameRules;
use engine::config::{ConfigStore, Validate};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "snake_onchain_config.yaml";

fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn config_store(path_override: Option<&str>) -> ConfigStore<Config> {
    let path = path_override
        .map(str::to_string)
        .unwrap_or_else(default_config_path);
    ConfigStore::new(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Board cell edge in pixels; the grid is whatever fits the viewport.
    pub cell_size_px: u32,
    pub rules: GameRules,
    /// Pseudo-address submitted with scores; generated on first run.
    pub player_address: Option<String>,
    /// Rows shown in the side-panel leaderboard.
    pub leaderboard_rows: usize,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size_px < 8 || self.cell_size_px > 64 {
            return Err("cell_size_px must be between 8 and 64".to_string());
        }
        if self.leaderboard_rows < 1 || self.leaderboard_rows > 100 {
            return Err("leaderboard_rows must be between 1 and 100".to_string());
        }
        if let Some(address) = &self.player_address
            && address.is_empty()
        {
            return Err("player_address must not be empty if provided".to_string());
        }
        self.rules.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_size_px: 20,
            rules: GameRules::default(),
            player_address: None,
            leaderboard_rows: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file_path() -> String {
        let random_number: u32 = rand::random();
        std::env::temp_dir()
            .join(format!("snake_onchain_client_config_{}.yaml", random_number))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_roundtrips_through_store() {
        let store = config_store(Some(&temp_file_path()));
        let config = Config {
            player_address: Some("0xfeedface".to_string()),
            ..Config::default()
        };

        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn test_missing_file_yields_default() {
        let store = config_store(Some("no_such_snake_onchain_config.yaml"));
        assert_eq!(store.load().unwrap(), Config::default());
    }

    #[test]
    fn test_tiny_cell_size_rejected() {
        let config = Config {
            cell_size_px: 2,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_rules_rejected_through_config() {
        let config = Config {
            rules: GameRules {
                min_delay_ms: 0,
                ..GameRules::default()
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
