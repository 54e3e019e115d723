//! # Plant Repository
//!
//! Serializes the whole plant list into a single slot of a [`SlotStorage`].
//!
//! ## Format
//!
//! The slot holds a JSON array of records, in list order:
//!
//! ```json
//! [
//!   {
//!     "id": "plant::7b0c4b1e-...",
//!     "name": "My Monstera",
//!     "type": "foliage",
//!     "wateringFrequency": 7,
//!     "lastWatered": "2026-10-19T08:00:00.000Z",
//!     "sunlight": "medium",
//!     "location": "Living room window"
//!   }
//! ]
//! ```
//!
//! There is no version tag; the array is written exactly as the list stands.
//! A missing or blank slot loads as an empty list. Anything else that does
//! not parse into valid plants is reported as [`StorageError::CorruptState`].

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

use super::error::{Result, StorageError};
use super::traits::{PlantStorage, SlotStorage};
use crate::domain::models::plant::{Plant, Sunlight, MAX_WATERING_FREQUENCY, MIN_WATERING_FREQUENCY};

/// Slot name the plant list is stored under
pub const DEFAULT_SLOT_KEY: &str = "plants";

/// Persisted record structure for plants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlantRecord {
    id: String,
    name: String,
    #[serde(rename = "type")]
    plant_type: String,
    watering_frequency: u32,
    last_watered: String,
    sunlight: String,
    location: String,
}

impl From<&Plant> for PlantRecord {
    fn from(plant: &Plant) -> Self {
        PlantRecord {
            id: plant.id.clone(),
            name: plant.name.clone(),
            plant_type: plant.plant_type.clone(),
            watering_frequency: plant.watering_frequency,
            last_watered: plant
                .last_watered
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
            sunlight: plant.sunlight.as_str().to_string(),
            location: plant.location.clone(),
        }
    }
}

impl TryFrom<PlantRecord> for Plant {
    type Error = String;

    fn try_from(record: PlantRecord) -> std::result::Result<Self, Self::Error> {
        let last_watered = DateTime::parse_from_rfc3339(&record.last_watered)
            .map_err(|e| {
                format!(
                    "plant {} has invalid lastWatered '{}': {}",
                    record.id, record.last_watered, e
                )
            })?
            .with_timezone(&Utc);

        let sunlight = Sunlight::parse(&record.sunlight).ok_or_else(|| {
            format!(
                "plant {} has unknown sunlight '{}'",
                record.id, record.sunlight
            )
        })?;

        let frequency = i64::from(record.watering_frequency);
        if !(MIN_WATERING_FREQUENCY..=MAX_WATERING_FREQUENCY).contains(&frequency) {
            return Err(format!(
                "plant {} has wateringFrequency {} outside 1-365",
                record.id, frequency
            ));
        }

        Ok(Plant {
            id: record.id,
            name: record.name,
            plant_type: record.plant_type,
            watering_frequency: record.watering_frequency,
            last_watered,
            sunlight,
            location: record.location,
        })
    }
}

/// Plant list repository writing through a slot storage
#[derive(Debug, Clone)]
pub struct PlantRepository<S: SlotStorage> {
    slots: S,
    key: String,
}

impl<S: SlotStorage> PlantRepository<S> {
    /// Repository using the default "plants" slot
    pub fn new(slots: S) -> Self {
        Self::with_key(slots, DEFAULT_SLOT_KEY)
    }

    pub fn with_key(slots: S, key: impl Into<String>) -> Self {
        Self {
            slots,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn corrupt(&self, reason: impl Into<String>) -> StorageError {
        StorageError::CorruptState {
            key: self.key.clone(),
            reason: reason.into(),
        }
    }

    fn decode(&self, contents: &str) -> Result<Vec<Plant>> {
        let records: Vec<PlantRecord> =
            serde_json::from_str(contents).map_err(|e| self.corrupt(e.to_string()))?;

        let mut seen = HashSet::new();
        let mut plants = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.id.clone()) {
                return Err(self.corrupt(format!("duplicate plant id {}", record.id)));
            }
            plants.push(Plant::try_from(record).map_err(|reason| self.corrupt(reason))?);
        }
        Ok(plants)
    }
}

impl<S: SlotStorage> PlantStorage for PlantRepository<S> {
    fn load_plants(&self) -> Result<Vec<Plant>> {
        let contents = match self.slots.read_slot(&self.key)? {
            Some(contents) => contents,
            None => {
                debug!("No stored plants in slot '{}'", self.key);
                return Ok(Vec::new());
            }
        };

        if contents.trim().is_empty() {
            debug!("Slot '{}' is blank, treating as no plants", self.key);
            return Ok(Vec::new());
        }

        let plants = self.decode(&contents).map_err(|e| {
            warn!("Failed to load plants from slot '{}': {}", self.key, e);
            e
        })?;
        debug!("Loaded {} plants from slot '{}'", plants.len(), self.key);
        Ok(plants)
    }

    fn save_plants(&self, plants: &[Plant]) -> Result<()> {
        let records: Vec<PlantRecord> = plants.iter().map(PlantRecord::from).collect();
        let json = serde_json::to_string(&records)?;
        self.slots.write_slot(&self.key, &json)?;
        debug!("Saved {} plants to slot '{}'", plants.len(), self.key);
        Ok(())
    }
}
