//! # Domain Layer
//!
//! Plant records, the pure list transitions applied to them, the store
//! service that persists those transitions, and the watering schedule
//! calculations derived from each plant.

pub mod clock;
pub mod commands;
pub mod error;
pub mod models;
pub mod plant_list;
pub mod plant_service;
pub mod schedule;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::PlantError;
pub use plant_service::PlantService;
pub use schedule::{PlantSchedule, ScheduleService, WateringStatus};
