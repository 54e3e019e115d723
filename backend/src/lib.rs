//! # Plant Care Backend
//!
//! Keeps a household's plant list, persists it to a key-value slot after
//! every change, and works out when each plant next needs water.
//! Everything is synchronous; a host calls into [`Backend::actions`]
//! directly.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

pub mod config;
pub mod domain;
pub mod io;
pub mod logging;
pub mod storage;

pub use config::BackendConfig;
pub use domain::{Clock, ManualClock, PlantError, SystemClock};
pub use io::PlantActions;
pub use storage::{JsonConnection, JsonSlotRepository, PlantRepository, PlantStorage};

/// Main backend struct that wires storage, clock and services together
pub struct Backend {
    pub actions: PlantActions,
}

impl Backend {
    /// Create a backend persisting to JSON files under `config.data_directory`
    pub fn new(config: BackendConfig) -> Result<Self> {
        if let Some(filter) = &config.log_filter {
            logging::init_logging(filter);
        }

        JsonConnection::validate_key(&config.slot_key)
            .with_context(|| format!("Unusable slot key '{}'", config.slot_key))?;
        let connection = JsonConnection::new(&config.data_directory).with_context(|| {
            format!(
                "Failed to open data directory {}",
                config.data_directory.display()
            )
        })?;
        let repository =
            PlantRepository::with_key(JsonSlotRepository::new(connection), config.slot_key.clone());

        info!(
            "Starting plant backend in {} (slot '{}')",
            config.data_directory.display(),
            config.slot_key
        );
        Self::with_storage(Arc::new(repository), Arc::new(SystemClock))
    }

    /// Create a backend over any plant storage and clock
    pub fn with_storage(storage: Arc<dyn PlantStorage>, clock: Arc<dyn Clock>) -> Result<Self> {
        let plant_service = domain::PlantService::load(storage, clock.clone())
            .context("Failed to load stored plants")?;
        let schedule_service = domain::ScheduleService::new(clock);

        Ok(Backend {
            actions: PlantActions::new(plant_service, schedule_service),
        })
    }
}
