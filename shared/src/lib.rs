use serde::{Deserialize, Serialize};

/// Plant record as exchanged with a front end
///
/// Field names match the persisted layout (`type`, `wateringFrequency`,
/// `lastWatered`) so the same JSON shape flows through every layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    /// Opaque unique identifier, e.g. "plant::6f1c..."
    pub id: String,
    pub name: String,
    /// Plant type key (succulent, flowering, foliage, herb, tree, vine)
    #[serde(rename = "type")]
    pub plant_type: String,
    /// Days between waterings (1-365)
    pub watering_frequency: u32,
    /// RFC 3339 timestamp of the last watering
    pub last_watered: String,
    /// One of "low", "medium", "high"
    pub sunlight: String,
    pub location: String,
}

/// Request for adding a new plant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlantRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub plant_type: String,
    /// Signed so out-of-range input reaches validation instead of failing to parse
    pub watering_frequency: i64,
    pub sunlight: String,
    pub location: String,
}

/// Response after adding a plant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddPlantResponse {
    pub plant: Plant,
    pub success_message: String,
}

/// Request for recording a watering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterPlantRequest {
    pub id: String,
}

/// Response after a watering; `plant` is None when the id was unknown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterPlantResponse {
    pub plant: Option<Plant>,
    pub success_message: String,
}

/// Request for removing a plant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovePlantRequest {
    pub id: String,
}

/// Response after removing a plant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovePlantResponse {
    pub removed: bool,
    pub success_message: String,
}

/// A plant together with everything a card needs to render it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantCard {
    pub plant: Plant,
    pub emoji: String,
    /// Negative when overdue, zero when due today
    pub days_until_watering: i64,
    pub is_overdue: bool,
    /// "Overdue by N days", "Due today" or "Due in N days"
    pub status_label: String,
    /// e.g. "Oct 19, 2026"
    pub next_watering_date: String,
    /// e.g. "Oct 12"
    pub last_watered_display: String,
    /// e.g. "Medium (Partial sun)"
    pub sunlight_description: String,
}

/// Response containing plant cards in list order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantListResponse {
    pub plants: Vec<PlantCard>,
}

impl PlantListResponse {
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}
