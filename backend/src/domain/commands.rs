//! Domain-level command and result types
//! These structs are used by services inside the domain layer and are **not**
//! exposed to front ends. The io layer maps the public DTOs defined in the
//! `shared` crate to these internal types.

pub mod plant {
    use crate::domain::models::plant::Plant;

    /// Input for adding a new plant.
    #[derive(Debug, Clone)]
    pub struct AddPlantCommand {
        pub name: String,
        pub plant_type: String,
        pub watering_frequency: i64,
        pub sunlight: String,
        pub location: String,
    }

    /// Input for recording a watering.
    #[derive(Debug, Clone)]
    pub struct WaterPlantCommand {
        pub plant_id: String,
    }

    /// Input for removing a plant.
    #[derive(Debug, Clone)]
    pub struct RemovePlantCommand {
        pub plant_id: String,
    }

    /// Result of adding a plant.
    #[derive(Debug, Clone)]
    pub struct AddPlantResult {
        pub plant: Plant,
    }

    /// Result of watering; `plant` is None when no plant had the id.
    #[derive(Debug, Clone)]
    pub struct WaterPlantResult {
        pub plant: Option<Plant>,
    }

    /// Result of removing; `removed` is None when no plant had the id.
    #[derive(Debug, Clone)]
    pub struct RemovePlantResult {
        pub removed: Option<Plant>,
    }
}
