use std::path::{Path, PathBuf};
#[cfg(unix)]
use std::{io::Write, os::unix::fs::OpenOptionsExt};

use thiserror::Error;

use crate::user::StoredUser;

/// Key of the single persisted slot.
pub const STORE_KEY: &str = "registeredUser";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("credential store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("stored user record is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A single-slot user store. Saving overwrites whatever was there.
///
/// Only [`StoredUser`] values can be written, so every password has passed
/// through the hasher before it gets here.
pub trait CredentialStore {
    fn load(&self) -> Result<Option<StoredUser>, StoreError>;
    fn save(&mut self, user: StoredUser) -> Result<(), StoreError>;
}

/// Keeps the record in memory. Used by dev mode and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slot: Option<StoredUser>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Result<Option<StoredUser>, StoreError> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, user: StoredUser) -> Result<(), StoreError> {
        self.slot = Some(user);
        Ok(())
    }
}

/// Keeps the record as one JSON blob in `<dir>/registeredUser.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store file named after [`STORE_KEY`] inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{STORE_KEY}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl CredentialStore for FileStore {
    fn load(&self) -> Result<Option<StoredUser>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&mut self, user: StoredUser) -> Result<(), StoreError> {
        let content = serde_json::to_string(&user)?;
        secure_write(&self.path, &content).map_err(|e| self.io_error(e))?;
        tracing::debug!("Saved user record to {}", self.path.display());
        Ok(())
    }
}

fn secure_write(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    #[cfg(unix)]
    {
        std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?
            .write_all(content.as_bytes())?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content)?;
    }

    Ok(())
}
