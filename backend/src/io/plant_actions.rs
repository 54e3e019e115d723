//! # Plant Actions
//!
//! The surface a front end drives: request DTOs in, response DTOs out.
//! Each action maps its request to a domain command, runs it through the
//! store, and maps the result back, attaching schedule figures where the
//! caller renders cards.

use tracing::{error, info};

use shared::{
    AddPlantResponse, NewPlantRequest, PlantListResponse, RemovePlantRequest, RemovePlantResponse,
    WaterPlantRequest, WaterPlantResponse,
};

use super::mappers::PlantMapper;
use crate::domain::commands::plant::{RemovePlantCommand, WaterPlantCommand};
use crate::domain::{PlantError, PlantService, ScheduleService};

pub struct PlantActions {
    plant_service: PlantService,
    schedule_service: ScheduleService,
}

impl PlantActions {
    pub fn new(plant_service: PlantService, schedule_service: ScheduleService) -> Self {
        Self {
            plant_service,
            schedule_service,
        }
    }

    pub fn add_plant(&mut self, request: NewPlantRequest) -> Result<AddPlantResponse, PlantError> {
        info!("add_plant - request: {:?}", request);

        let command = PlantMapper::to_add_command(request);
        match self.plant_service.add_plant(command) {
            Ok(result) => Ok(AddPlantResponse {
                success_message: format!("{} has been added.", result.plant.name),
                plant: PlantMapper::to_dto(&result.plant),
            }),
            Err(e) => {
                error!("Failed to add plant: {}", e);
                Err(e)
            }
        }
    }

    pub fn water_plant(
        &mut self,
        request: WaterPlantRequest,
    ) -> Result<WaterPlantResponse, PlantError> {
        info!("water_plant - id: {}", request.id);

        let result = self.plant_service.water_plant(WaterPlantCommand {
            plant_id: request.id,
        })?;
        let success_message = match &result.plant {
            Some(plant) => format!("{} has been watered.", plant.name),
            None => "Plant not found; nothing was watered.".to_string(),
        };
        Ok(WaterPlantResponse {
            plant: result.plant.as_ref().map(PlantMapper::to_dto),
            success_message,
        })
    }

    pub fn remove_plant(
        &mut self,
        request: RemovePlantRequest,
    ) -> Result<RemovePlantResponse, PlantError> {
        info!("remove_plant - id: {}", request.id);

        let result = self.plant_service.remove_plant(RemovePlantCommand {
            plant_id: request.id,
        })?;
        let success_message = match &result.removed {
            Some(plant) => format!("{} has been removed.", plant.name),
            None => "Plant not found; nothing was removed.".to_string(),
        };
        Ok(RemovePlantResponse {
            removed: result.removed.is_some(),
            success_message,
        })
    }

    /// Cards for every plant, in insertion order
    pub fn list_plants(&self) -> PlantListResponse {
        let entries = self.schedule_service.statuses(self.plant_service.plants());
        PlantMapper::to_list_dto(&entries)
    }

    /// Cards for plants due today or overdue, most overdue first
    pub fn due_plants(&self) -> PlantListResponse {
        let entries = self.schedule_service.due_plants(self.plant_service.plants());
        PlantMapper::to_list_dto(&entries)
    }
}
