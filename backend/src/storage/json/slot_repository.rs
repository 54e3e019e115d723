//! # JSON Slot Repository
//!
//! File-backed implementation of [`SlotStorage`]. Each slot lives in its own
//! file under the data directory:
//!
//! ```text
//! data/
//! └── plants.json    ← the "plants" slot
//! ```
//!
//! Writes go to a temp file first and are then renamed over the target, so a
//! crash mid-write leaves the previous contents intact.

use std::fs;
use tracing::debug;

use super::connection::JsonConnection;
use crate::storage::error::Result;
use crate::storage::traits::SlotStorage;

#[derive(Debug, Clone)]
pub struct JsonSlotRepository {
    connection: JsonConnection,
}

impl JsonSlotRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl SlotStorage for JsonSlotRepository {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let path = self.connection.slot_path(key)?;
        if !path.exists() {
            debug!("Slot '{}' has no file at {:?}", key, path);
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        debug!("Read {} bytes from slot '{}'", contents.len(), key);
        Ok(Some(contents))
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        let path = self.connection.slot_path(key)?;
        let base_dir = self.connection.base_directory();
        if !base_dir.exists() {
            fs::create_dir_all(base_dir)?;
        }

        // Use atomic write pattern: write to temp file, then rename
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        debug!("Wrote {} bytes to slot '{}'", value.len(), key);
        Ok(())
    }
}
