use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::storage::error::{Result, StorageError};

/// Directory name used under the platform data directory
pub const DEFAULT_DIRECTORY_NAME: &str = "plant-care-tracker";

/// JsonConnection owns the data directory and maps slot keys to files in it
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new connection rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Default data directory for this platform
    ///
    /// Falls back to a directory relative to the working directory when the
    /// platform has no notion of a local data directory.
    pub fn default_directory() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIRECTORY_NAME)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// File that holds the slot named `key`
    ///
    /// Keys are used as the file stem unchanged; anything that would need
    /// rewriting is rejected so two keys never share a file.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        Self::validate_key(key)?;
        Ok(self.base_directory.join(format!("{}.json", key)))
    }

    pub fn validate_key(key: &str) -> Result<()> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
        if valid {
            Ok(())
        } else {
            Err(StorageError::InvalidSlotKey(key.to_string()))
        }
    }
}
