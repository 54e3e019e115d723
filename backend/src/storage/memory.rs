//! In-memory slot storage for tests and for hosts that persist elsewhere.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::error::{Result, StorageError};
use super::traits::SlotStorage;

/// Slot storage backed by a shared `HashMap`
///
/// Clones share the same map, so a test can inspect what a store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored under `key`
    pub fn with_slot(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut slots) = storage.slots.lock() {
            slots.insert(key.to_string(), value.to_string());
        }
        storage
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(slots.get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_slot() {
        let storage = MemorySlotStorage::new();
        assert_eq!(storage.read_slot("plants").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let storage = MemorySlotStorage::new();
        storage.write_slot("plants", "[]").unwrap();
        assert_eq!(storage.read_slot("plants").unwrap().as_deref(), Some("[]"));

        storage.write_slot("plants", "[1]").unwrap();
        assert_eq!(storage.read_slot("plants").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_clones_share_slots() {
        let storage = MemorySlotStorage::with_slot("k", "v");
        let other = storage.clone();
        other.write_slot("k", "w").unwrap();
        assert_eq!(storage.read_slot("k").unwrap().as_deref(), Some("w"));
    }
}
