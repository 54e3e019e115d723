//! Errors raised by storage backends.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The slot holds data that cannot be read back as plants
    #[error("Stored data in slot '{key}' is corrupt: {reason}")]
    CorruptState { key: String, reason: String },

    /// Slot keys map one-to-one onto file names, so only `[a-z0-9_-]` is accepted
    #[error("Invalid slot key '{0}': use lowercase letters, digits, '-' or '_'")]
    InvalidSlotKey(String),

    #[error("Storage lock was poisoned")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, StorageError>;
