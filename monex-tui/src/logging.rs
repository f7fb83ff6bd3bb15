use anyhow::{anyhow, Context, Result};
use std::sync::Mutex;
use tracing_subscriber::{fmt::time::LocalTime, EnvFilter};

use crate::config::MonexConfig;

/// Send tracing output to `monex.log` in the config directory. Stdout belongs
/// to the terminal UI, so nothing is printed there.
pub fn init(cfg: &MonexConfig) -> Result<()> {
    let path = MonexConfig::log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file at {}", path.display()))?;

    let filter =
        EnvFilter::try_from_env("MONEX_LOG").unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_timer(LocalTime::rfc_3339())
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))
}
