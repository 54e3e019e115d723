//! Pure transitions over the plant list.
//!
//! Each function takes the current list and returns the next one; the store
//! applies them and then persists the result.

use chrono::{DateTime, Utc};

use crate::domain::commands::plant::AddPlantCommand;
use crate::domain::models::plant::{
    Plant, PlantFieldError, PlantType, PlantValidationError, Sunlight, MAX_WATERING_FREQUENCY,
    MIN_WATERING_FREQUENCY,
};

/// Fields of an add command after validation
struct ValidatedPlant {
    watering_frequency: u32,
    sunlight: Sunlight,
}

/// Check every field of an add command, collecting all problems
pub fn validate(command: &AddPlantCommand) -> Result<(), PlantValidationError> {
    validate_fields(command).map(|_| ())
}

fn validate_fields(command: &AddPlantCommand) -> Result<ValidatedPlant, PlantValidationError> {
    let mut issues = Vec::new();

    if command.name.trim().is_empty() {
        issues.push(PlantFieldError::EmptyName);
    }

    if PlantType::parse(&command.plant_type).is_none() {
        issues.push(PlantFieldError::UnknownType(command.plant_type.clone()));
    }

    let frequency = command.watering_frequency;
    if !(MIN_WATERING_FREQUENCY..=MAX_WATERING_FREQUENCY).contains(&frequency) {
        issues.push(PlantFieldError::FrequencyOutOfRange(frequency));
    }

    let sunlight = Sunlight::parse(&command.sunlight);
    if sunlight.is_none() {
        issues.push(PlantFieldError::UnknownSunlight(command.sunlight.clone()));
    }

    if command.location.trim().is_empty() {
        issues.push(PlantFieldError::EmptyLocation);
    }

    match (issues.is_empty(), u32::try_from(frequency), sunlight) {
        (true, Ok(watering_frequency), Some(sunlight)) => Ok(ValidatedPlant {
            watering_frequency,
            sunlight,
        }),
        _ => Err(PlantValidationError { issues }),
    }
}

/// Append a new plant built from `command`, watered at `now`
pub fn add(
    plants: &[Plant],
    command: &AddPlantCommand,
    now: DateTime<Utc>,
) -> Result<Vec<Plant>, PlantValidationError> {
    let validated = validate_fields(command)?;

    let mut id = Plant::generate_id();
    while plants.iter().any(|p| p.id == id) {
        id = Plant::generate_id();
    }

    let mut next = plants.to_vec();
    next.push(Plant {
        id,
        name: command.name.clone(),
        plant_type: command.plant_type.clone(),
        watering_frequency: validated.watering_frequency,
        last_watered: now,
        sunlight: validated.sunlight,
        location: command.location.clone(),
    });
    Ok(next)
}

/// Mark the plant with `id` as watered at `now`
///
/// `last_watered` never moves backwards. Unknown ids leave the list as is.
pub fn water(plants: &[Plant], id: &str, now: DateTime<Utc>) -> Vec<Plant> {
    plants
        .iter()
        .map(|plant| {
            if plant.id == id {
                Plant {
                    last_watered: plant.last_watered.max(now),
                    ..plant.clone()
                }
            } else {
                plant.clone()
            }
        })
        .collect()
}

/// Drop the plant with `id`; unknown ids leave the list as is
pub fn remove(plants: &[Plant], id: &str) -> Vec<Plant> {
    plants.iter().filter(|p| p.id != id).cloned().collect()
}
