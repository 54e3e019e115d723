//! # JSON Storage Module
//!
//! File-based slot storage: every slot is a JSON document in the data
//! directory, written atomically.

pub mod connection;
pub mod slot_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::JsonConnection;
pub use slot_repository::JsonSlotRepository;
