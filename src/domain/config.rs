//! # Configuration
//!
//! Manages the loading and parsing of the bot's configuration file (`config.yaml`).
//! Everything here is read once at startup and stays fixed for the life of the process.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main application configuration structure.
/// Matches the layout of `config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL of the homeserver, e.g. `https://matrix.example.org`.
    pub homeserver: String,
    /// Full user ID of the bot account. Its server name decides who counts as a local user.
    pub user_id: String,
    pub access_token: String,
    /// The only room commands are accepted from.
    pub moderation_room_id: String,
    /// Device the access token belongs to. Looked up with `whoami` when missing.
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file path, written alongside stdout.
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: AppConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Server name part of the bot's user ID (`example.org` for `@roomba:example.org`).
    pub fn server_name(&self) -> Option<&str> {
        server_name_of(&self.user_id)
    }
}

/// Everything after the first `:` of a Matrix user ID. Ports stay attached.
pub fn server_name_of(user_id: &str) -> Option<&str> {
    user_id
        .split_once(':')
        .map(|(_, server)| server)
        .filter(|server| !server.is_empty())
}
