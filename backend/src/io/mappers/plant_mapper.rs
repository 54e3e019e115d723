use chrono::SecondsFormat;
use shared::{NewPlantRequest, Plant as SharedPlant, PlantCard, PlantListResponse};

use crate::domain::commands::plant::AddPlantCommand;
use crate::domain::models::plant::Plant as DomainPlant;
use crate::domain::schedule::{emoji_for, format_long_date, format_short_date, PlantSchedule};

/// Mapper to convert between shared plant DTOs and domain plants.
pub struct PlantMapper;

impl PlantMapper {
    pub fn to_dto(domain: &DomainPlant) -> SharedPlant {
        SharedPlant {
            id: domain.id.clone(),
            name: domain.name.clone(),
            plant_type: domain.plant_type.clone(),
            watering_frequency: domain.watering_frequency,
            last_watered: domain
                .last_watered
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
            sunlight: domain.sunlight.as_str().to_string(),
            location: domain.location.clone(),
        }
    }

    pub fn to_add_command(request: NewPlantRequest) -> AddPlantCommand {
        AddPlantCommand {
            name: request.name,
            plant_type: request.plant_type,
            watering_frequency: request.watering_frequency,
            sunlight: request.sunlight,
            location: request.location,
        }
    }

    /// Everything a plant card shows, computed for one instant
    pub fn to_card(domain: &DomainPlant, schedule: &PlantSchedule) -> PlantCard {
        PlantCard {
            plant: Self::to_dto(domain),
            emoji: emoji_for(&domain.plant_type).to_string(),
            days_until_watering: schedule.days_until,
            is_overdue: schedule.is_overdue,
            status_label: schedule.label(),
            next_watering_date: format_long_date(schedule.next_watering_date),
            last_watered_display: format_short_date(domain.last_watered.date_naive()),
            sunlight_description: domain.sunlight.description().to_string(),
        }
    }

    pub fn to_list_dto(entries: &[(DomainPlant, PlantSchedule)]) -> PlantListResponse {
        PlantListResponse {
            plants: entries
                .iter()
                .map(|(plant, schedule)| Self::to_card(plant, schedule))
                .collect(),
        }
    }
}
