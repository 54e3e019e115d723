//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use super::error::Result;
use crate::domain::models::plant::Plant;

/// A named-slot key-value store holding text values
///
/// This is the persistence primitive the plant list is written through, so
/// any host that can store a string under a key can back the tracker.
pub trait SlotStorage: Send + Sync {
    /// Read the value stored under `key`, or None if the slot was never written
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn write_slot(&self, key: &str, value: &str) -> Result<()>;
}

/// Trait defining the interface for plant list storage operations
pub trait PlantStorage: Send + Sync {
    /// Load the full plant list; an absent list loads as empty
    fn load_plants(&self) -> Result<Vec<Plant>>;

    /// Persist the full plant list, overwriting whatever was stored
    fn save_plants(&self, plants: &[Plant]) -> Result<()>;
}
