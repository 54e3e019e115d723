//! Domain model for a plant and its watering schedule inputs.

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Lowest allowed watering frequency in days
pub const MIN_WATERING_FREQUENCY: i64 = 1;
/// Highest allowed watering frequency in days
pub const MAX_WATERING_FREQUENCY: i64 = 365;

/// Domain model representing a tracked plant.
#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    pub id: String,
    pub name: String,
    /// Stored verbatim; see [`PlantType::parse`] for the recognized keys
    pub plant_type: String,
    pub watering_frequency: u32,
    pub last_watered: DateTime<Utc>,
    pub sunlight: Sunlight,
    pub location: String,
}

impl Plant {
    /// Generate a unique ID for a plant
    pub fn generate_id() -> String {
        format!("plant::{}", Uuid::new_v4())
    }
}

/// The plant types offered when adding a plant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlantType {
    Succulent,
    Flowering,
    Foliage,
    Herb,
    Tree,
    Vine,
}

impl PlantType {
    pub const ALL: [PlantType; 6] = [
        PlantType::Succulent,
        PlantType::Flowering,
        PlantType::Foliage,
        PlantType::Herb,
        PlantType::Tree,
        PlantType::Vine,
    ];

    /// Parse a type key, ignoring case
    ///
    /// Surrounding whitespace is not stripped, so `" vine "` is unknown.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlantType::Succulent => "succulent",
            PlantType::Flowering => "flowering",
            PlantType::Foliage => "foliage",
            PlantType::Herb => "herb",
            PlantType::Tree => "tree",
            PlantType::Vine => "vine",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            PlantType::Succulent => "🌵",
            PlantType::Flowering => "🌺",
            PlantType::Foliage => "🌿",
            PlantType::Herb => "🌱",
            PlantType::Tree => "🌳",
            PlantType::Vine => "🍃",
        }
    }
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much light a plant needs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Sunlight {
    Low,
    #[default]
    Medium,
    High,
}

impl Sunlight {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Sunlight::Low),
            "medium" => Some(Sunlight::Medium),
            "high" => Some(Sunlight::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sunlight::Low => "low",
            Sunlight::Medium => "medium",
            Sunlight::High => "high",
        }
    }

    /// Human-readable description shown next to the sunlight level
    pub fn description(&self) -> &'static str {
        match self {
            Sunlight::Low => "Low (Indirect)",
            Sunlight::Medium => "Medium (Partial sun)",
            Sunlight::High => "High (Full sun)",
        }
    }
}

impl fmt::Display for Sunlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field that failed validation when adding a plant
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlantFieldError {
    #[error("Plant name cannot be empty")]
    EmptyName,
    #[error("Unknown plant type: '{0}'")]
    UnknownType(String),
    #[error("Watering frequency must be between 1 and 365 days, got {0}")]
    FrequencyOutOfRange(i64),
    #[error("Unknown sunlight level: '{0}'")]
    UnknownSunlight(String),
    #[error("Location cannot be empty")]
    EmptyLocation,
}

/// Every field that failed validation, in form order
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid plant: {}", join_issues(.issues))]
pub struct PlantValidationError {
    pub issues: Vec<PlantFieldError>,
}

fn join_issues(issues: &[PlantFieldError]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl PlantValidationError {
    pub fn contains(&self, issue: &PlantFieldError) -> bool {
        self.issues.contains(issue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_is_prefixed_and_unique() {
        let id1 = Plant::generate_id();
        let id2 = Plant::generate_id();

        assert!(id1.starts_with("plant::"));
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_plant_type_parse_is_case_insensitive() {
        assert_eq!(PlantType::parse("succulent"), Some(PlantType::Succulent));
        assert_eq!(PlantType::parse("SUCCULENT"), Some(PlantType::Succulent));
        assert_eq!(PlantType::parse("Vine"), Some(PlantType::Vine));
        assert_eq!(PlantType::parse(" vine "), None);
        assert_eq!(PlantType::parse("bonsai"), None);
        assert_eq!(PlantType::parse(""), None);
    }

    #[test]
    fn test_plant_type_round_trips_through_as_str() {
        for kind in PlantType::ALL {
            assert_eq!(PlantType::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_sunlight_parse_and_descriptions() {
        assert_eq!(Sunlight::parse("low"), Some(Sunlight::Low));
        assert_eq!(Sunlight::parse("MEDIUM"), Some(Sunlight::Medium));
        assert_eq!(Sunlight::parse("high"), Some(Sunlight::High));
        assert_eq!(Sunlight::parse("full"), None);

        assert_eq!(Sunlight::Low.description(), "Low (Indirect)");
        assert_eq!(Sunlight::default(), Sunlight::Medium);
    }

    #[test]
    fn test_validation_error_lists_every_issue() {
        let error = PlantValidationError {
            issues: vec![
                PlantFieldError::EmptyName,
                PlantFieldError::FrequencyOutOfRange(0),
            ],
        };

        let message = error.to_string();
        assert!(message.contains("Plant name cannot be empty"));
        assert!(message.contains("between 1 and 365 days, got 0"));
        assert!(error.contains(&PlantFieldError::EmptyName));
        assert!(!error.contains(&PlantFieldError::EmptyLocation));
    }
}
