//! # Storage Module
//!
//! Handles all data persistence for the plant care tracker.
//!
//! The plant list is written through a [`SlotStorage`]: a named-slot
//! key-value store holding text. [`PlantRepository`] turns the list into a
//! JSON array and back, and decides what counts as corrupt data. The domain
//! layer only sees the [`PlantStorage`] trait, so the slot backend can be
//! swapped without touching it.
//!
//! ## Backends
//!
//! - **json**: one file per slot in the data directory, atomic writes
//! - **memory**: a shared in-process map, used by tests and embedding hosts

pub mod error;
pub mod json;
pub mod memory;
pub mod plant_repository;
pub mod traits;

pub use error::StorageError;
pub use json::{JsonConnection, JsonSlotRepository};
pub use memory::MemorySlotStorage;
pub use plant_repository::{PlantRepository, DEFAULT_SLOT_KEY};
pub use traits::{PlantStorage, SlotStorage};
