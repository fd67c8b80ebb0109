use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root the `/games/{node}` paths are appended to
    pub base_url: String,
    /// Backend partition segment of the collection path
    #[serde(default = "default_node")]
    pub node: String,
    pub log_level: String,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>, // transport default when unset
    #[serde(default = "default_config_version")]
    pub config_version: u32,
}

fn default_node() -> String {
    "node1".to_string()
}

fn default_config_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            node: default_node(),
            log_level: "info".to_string(),
            request_timeout_secs: None,
            config_version: default_config_version(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `config_path`, writing defaults there when the file is missing.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let contents = fs::read_to_string(config_path)?;

            match toml::from_str::<Config>(&contents) {
                Ok(mut config) => {
                    if config.config_version < default_config_version() {
                        config = Self::migrate_config(config)?;
                        config.save_to(config_path)?;
                    }
                    config.validate()?;
                    Ok(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config: {}. Using defaults and merging.", e);
                    let mut config = Self::default();

                    // Salvage whatever known keys still parse
                    if let Ok(value) = toml::from_str::<toml::Value>(&contents) {
                        if let Some(table) = value.as_table() {
                            if let Some(base_url) = table.get("base_url").and_then(|v| v.as_str()) {
                                config.base_url = base_url.to_string();
                            }
                            if let Some(node) = table.get("node").and_then(|v| v.as_str()) {
                                config.node = node.to_string();
                            }
                            if let Some(level) = table.get("log_level").and_then(|v| v.as_str()) {
                                config.log_level = level.to_string();
                            }
                        }
                    }

                    config.validate()?;
                    config.save_to(config_path)?;
                    Ok(config)
                }
            }
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    /// Migrate config from older versions
    fn migrate_config(mut config: Config) -> Result<Self> {
        let target_version = default_config_version();

        log::info!(
            "Migrating config from v{} to v{}",
            config.config_version,
            target_version
        );

        if config.node.trim().is_empty() {
            config.node = default_node();
        }

        config.config_version = target_version;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "Invalid log level: '{}'. Must be one of: {}",
                self.log_level,
                valid_log_levels.join(", ")
            )));
        }

        let url = self.parsed_base_url()?;
        if url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "Base URL cannot carry a path: {}",
                self.base_url
            )));
        }

        if self.node.trim().is_empty() || self.node.contains('/') {
            return Err(Error::Config(format!(
                "Invalid node: '{}'. Must be a single non-empty path segment",
                self.node
            )));
        }

        if self.request_timeout_secs == Some(0) {
            return Err(Error::Config(
                "request_timeout_secs must be at least 1 when set".to_string(),
            ));
        }

        Ok(())
    }

    pub fn parsed_base_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(config_path, contents)?;

        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "games-admin")
            .ok_or_else(|| Error::Config("Failed to determine project directories".to_string()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }
}
