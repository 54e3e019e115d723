//! # IO Layer
//!
//! Translates between the DTOs in the `shared` crate and the domain layer.

pub mod mappers;
pub mod plant_actions;

pub use plant_actions::PlantActions;
