use anyhow::{Context, Result};
use monex_auth::FileStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonexConfig {
    /// Where the registered user is kept. Defaults to the config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,

    /// Pause between "confirmation sent" and the switch to the login screen.
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,

    /// tracing filter used when MONEX_LOG is not set, e.g. "info" or "monex_auth=debug"
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_redirect_delay_ms() -> u64 {
    2000
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for MonexConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            redirect_delay_ms: default_redirect_delay_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl MonexConfig {
    pub fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("monex-tui"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("monex.log"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }

    /// The file-backed credential store this config points at.
    pub fn file_store(&self) -> Result<FileStore> {
        match &self.store_path {
            Some(path) => Ok(FileStore::new(path)),
            None => Ok(FileStore::in_dir(Self::config_dir()?)),
        }
    }
}
