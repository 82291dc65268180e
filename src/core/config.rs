//! User configuration: the list of root paths searched for repositories.
//!
//! The config lives in `config.json` under the application configuration
//! directory. A missing file is treated as a first run and replaced with a
//! default; an unreadable or unparseable file is a fatal startup error.

use crate::core::dirs::get_config_directory;
use crate::core::error::{RepoSwitcherError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Root paths searched for repositories, in configured order.
    /// Order is significant: it feeds the cache fingerprint.
    pub paths: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: vec!["~/Git".to_string()],
        }
    }
}

impl Config {
    pub fn load_or_create() -> Result<Self> {
        let config_dir = get_config_directory()?;
        let config_file = config_dir.join(CONFIG_FILE_NAME);

        if config_file.exists() {
            Self::load_from(&config_file)
        } else {
            let config = Self::default();
            config.save_to(&config_file)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RepoSwitcherError::config_read_failed(path, e))?;
        serde_json::from_str(&content).map_err(|e| RepoSwitcherError::config_parse_failed(path, e))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
