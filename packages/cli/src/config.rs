//! TOML configuration.
//!
//! The config file lives at `~/.config/lifedesk/lifedesk.toml` (following
//! the platform config directory) and names the API secret plus the ids of
//! the workspace databases and anchor blocks:
//!
//! ```toml
//! [api]
//! secret = "secret_..."
//!
//! [databases]
//! daily = "..."
//! areas = "..."
//! tasks = "..."
//! sessions = "..."
//! notes = "..."
//!
//! [blocks]
//! today = "..."
//!
//! [default_icons]
//! tasks = "https://example.com/task.png"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub databases: DatabaseConfig,
    #[serde(default)]
    pub blocks: BlockConfig,
    #[serde(default)]
    pub default_icons: IconConfig,
}

#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    pub secret: String,
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Ids of the workspace databases.
#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub daily: Uuid,
    pub areas: Uuid,
    pub tasks: Uuid,
    pub sessions: Uuid,
    pub notes: Uuid,
    pub accounts: Uuid,
    pub transactions: Uuid,
    pub resources: Uuid,
}

/// Ids of anchor blocks on the planning page, used as append targets.
#[derive(Debug, Default, Deserialize)]
pub struct BlockConfig {
    pub today: Option<Uuid>,
    pub tomorrow: Option<Uuid>,
    pub later: Option<Uuid>,
}

/// External icon URLs applied to pages created in each database.
#[derive(Debug, Default, Deserialize)]
pub struct IconConfig {
    pub daily: Option<String>,
    pub tasks: Option<String>,
    pub sessions: Option<String>,
    pub notes: Option<String>,
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("no config directory on this platform")?;
        Ok(base.join("lifedesk").join("lifedesk.toml"))
    }

    pub fn load(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config at {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses() {
        let config: Config = toml::from_str(
            r#"
            [api]
            secret = "secret_abc"

            [databases]
            daily = "00000000-0000-0000-0000-000000000001"
            areas = "00000000-0000-0000-0000-000000000002"
            tasks = "00000000-0000-0000-0000-000000000003"
            sessions = "00000000-0000-0000-0000-000000000004"
            notes = "00000000-0000-0000-0000-000000000005"
            accounts = "00000000-0000-0000-0000-000000000007"
            transactions = "00000000-0000-0000-0000-000000000008"
            resources = "00000000-0000-0000-0000-000000000009"

            [blocks]
            today = "00000000-0000-0000-0000-000000000006"

            [default_icons]
            tasks = "https://example.com/task.png"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.secret, "secret_abc");
        assert!(config.blocks.today.is_some());
        assert!(config.blocks.tomorrow.is_none());
        assert_eq!(
            config.default_icons.tasks.as_deref(),
            Some("https://example.com/task.png")
        );
    }

    #[test]
    fn blocks_and_icons_are_optional() {
        let config: Config = toml::from_str(
            r#"
            [api]
            secret = "secret_abc"

            [databases]
            daily = "00000000-0000-0000-0000-000000000001"
            areas = "00000000-0000-0000-0000-000000000002"
            tasks = "00000000-0000-0000-0000-000000000003"
            sessions = "00000000-0000-0000-0000-000000000004"
            notes = "00000000-0000-0000-0000-000000000005"
            accounts = "00000000-0000-0000-0000-000000000007"
            transactions = "00000000-0000-0000-0000-000000000008"
            resources = "00000000-0000-0000-0000-000000000009"
            "#,
        )
        .unwrap();
        assert!(config.blocks.today.is_none());
        assert!(config.default_icons.daily.is_none());
    }
}
