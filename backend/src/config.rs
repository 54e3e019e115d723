use std::path::PathBuf;

use crate::storage::{JsonConnection, DEFAULT_SLOT_KEY};

/// Settings for building a [`crate::Backend`]
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    /// Directory holding one `<slot>.json` file per slot
    pub data_directory: PathBuf,
    /// Slot the plant list is stored under
    pub slot_key: String,
    /// `EnvFilter` directive such as "info"; `None` leaves logging alone
    pub log_filter: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            data_directory: JsonConnection::default_directory(),
            slot_key: DEFAULT_SLOT_KEY.to_string(),
            log_filter: None,
        }
    }
}

impl BackendConfig {
    pub fn with_data_directory(mut self, data_directory: impl Into<PathBuf>) -> Self {
        self.data_directory = data_directory.into();
        self
    }

    pub fn with_slot_key(mut self, slot_key: impl Into<String>) -> Self {
        self.slot_key = slot_key.into();
        self
    }

    pub fn with_log_filter(mut self, log_filter: impl Into<String>) -> Self {
        self.log_filter = Some(log_filter.into());
        self
    }
}
