use thiserror::Error;

use crate::domain::models::plant::PlantValidationError;
use crate::storage::StorageError;

/// Errors surfaced by the plant store
#[derive(Debug, Error)]
pub enum PlantError {
    /// Input for a new plant failed one or more field checks; nothing changed
    #[error(transparent)]
    Validation(#[from] PlantValidationError),

    /// Persisted data could not be read back as plants
    #[error("Stored plants in slot '{key}' are unreadable: {reason}")]
    CorruptState { key: String, reason: String },

    #[error("Plant storage failed: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for PlantError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::CorruptState { key, reason } => PlantError::CorruptState { key, reason },
            other => PlantError::Storage(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_storage_error_maps_to_corrupt_state() {
        let error: PlantError = StorageError::CorruptState {
            key: "plants".to_string(),
            reason: "expected value".to_string(),
        }
        .into();

        match error {
            PlantError::CorruptState { key, reason } => {
                assert_eq!(key, "plants");
                assert_eq!(reason, "expected value");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_other_storage_errors_stay_storage() {
        let error: PlantError = StorageError::Poisoned.into();
        assert!(matches!(error, PlantError::Storage(StorageError::Poisoned)));
    }
}
