use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::clock::Clock;
use crate::domain::commands::plant::{
    AddPlantCommand, AddPlantResult, RemovePlantCommand, RemovePlantResult, WaterPlantCommand,
    WaterPlantResult,
};
use crate::domain::error::PlantError;
use crate::domain::models::plant::Plant;
use crate::domain::plant_list;
use crate::storage::PlantStorage;

type Result<T> = std::result::Result<T, PlantError>;

/// The plant store: owns the authoritative plant list
///
/// Every mutating operation computes the next list with a [`plant_list`]
/// transition and saves it; the in-memory list only changes once the save
/// succeeds.
pub struct PlantService {
    plants: Vec<Plant>,
    storage: Arc<dyn PlantStorage>,
    clock: Arc<dyn Clock>,
}

impl PlantService {
    /// Build the store and load whatever is persisted
    ///
    /// Fails with [`PlantError::CorruptState`] if the stored list is unreadable.
    pub fn load(storage: Arc<dyn PlantStorage>, clock: Arc<dyn Clock>) -> Result<Self> {
        let mut service = Self {
            plants: Vec::new(),
            storage,
            clock,
        };
        service.reload()?;
        Ok(service)
    }

    /// Replace the in-memory list with what storage holds
    pub fn reload(&mut self) -> Result<()> {
        self.plants = self.storage.load_plants()?;
        debug!("Loaded {} plants", self.plants.len());
        Ok(())
    }

    /// Persist the full list, overwriting prior contents
    pub fn save(&self) -> Result<()> {
        self.storage.save_plants(&self.plants)?;
        debug!("Saved {} plants", self.plants.len());
        Ok(())
    }

    fn commit(&mut self, next: Vec<Plant>) -> Result<()> {
        self.storage.save_plants(&next)?;
        debug!("Saved {} plants", next.len());
        self.plants = next;
        Ok(())
    }

    /// All plants in insertion order
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn get_plant(&self, plant_id: &str) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == plant_id)
    }

    /// Add a new plant, watered as of now
    pub fn add_plant(&mut self, command: AddPlantCommand) -> Result<AddPlantResult> {
        info!(
            "Adding plant: name={}, type={}, frequency={}",
            command.name, command.plant_type, command.watering_frequency
        );

        let next = plant_list::add(&self.plants, &command, self.clock.now()).map_err(|e| {
            warn!("Rejected new plant: {}", e);
            e
        })?;
        self.commit(next)?;

        // add only ever appends
        let plant = self.plants[self.plants.len() - 1].clone();
        info!("Added plant: {} with ID: {}", plant.name, plant.id);
        Ok(AddPlantResult { plant })
    }

    /// Record a watering now; unknown ids are a no-op
    pub fn water_plant(&mut self, command: WaterPlantCommand) -> Result<WaterPlantResult> {
        info!("Watering plant: {}", command.plant_id);

        let next = plant_list::water(&self.plants, &command.plant_id, self.clock.now());
        self.commit(next)?;

        let plant = self.get_plant(&command.plant_id).cloned();
        match &plant {
            Some(p) => info!("Watered plant {} at {}", p.id, p.last_watered.to_rfc3339()),
            None => warn!("No plant to water with ID: {}", command.plant_id),
        }
        Ok(WaterPlantResult { plant })
    }

    /// Remove a plant permanently; unknown ids are a no-op
    pub fn remove_plant(&mut self, command: RemovePlantCommand) -> Result<RemovePlantResult> {
        info!("Removing plant: {}", command.plant_id);

        let removed = self.get_plant(&command.plant_id).cloned();
        let next = plant_list::remove(&self.plants, &command.plant_id);
        self.commit(next)?;

        match &removed {
            Some(p) => info!("Removed plant: {} with ID: {}", p.name, p.id),
            None => warn!("No plant to remove with ID: {}", command.plant_id),
        }
        Ok(RemovePlantResult { removed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::ManualClock;
    use crate::domain::models::plant::PlantFieldError;
    use crate::domain::schedule::{days_until_watering, status_label};
    use crate::storage::{MemorySlotStorage, PlantRepository, SlotStorage, StorageError};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap()
    }

    struct Fixture {
        slots: MemorySlotStorage,
        clock: ManualClock,
        service: PlantService,
    }

    fn setup_test() -> Fixture {
        let slots = MemorySlotStorage::new();
        let clock = ManualClock::new(t0());
        let service = PlantService::load(
            Arc::new(PlantRepository::new(slots.clone())),
            Arc::new(clock.clone()),
        )
        .expect("Failed to load empty store");
        Fixture {
            slots,
            clock,
            service,
        }
    }

    /// Slot storage that reads from `inner` but rejects every write
    struct ReadOnlySlots {
        inner: MemorySlotStorage,
    }

    impl SlotStorage for ReadOnlySlots {
        fn read_slot(&self, key: &str) -> crate::storage::error::Result<Option<String>> {
            self.inner.read_slot(key)
        }

        fn write_slot(&self, _key: &str, _value: &str) -> crate::storage::error::Result<()> {
            Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "storage quota exceeded",
            )))
        }
    }

    fn add_command(name: &str, frequency: i64) -> AddPlantCommand {
        AddPlantCommand {
            name: name.to_string(),
            plant_type: "herb".to_string(),
            watering_frequency: frequency,
            sunlight: "high".to_string(),
            location: "Kitchen".to_string(),
        }
    }

    fn reload_from(slots: &MemorySlotStorage) -> Vec<Plant> {
        PlantService::load(
            Arc::new(PlantRepository::new(slots.clone())),
            Arc::new(ManualClock::new(t0())),
        )
        .expect("Failed to reload store")
        .plants()
        .to_vec()
    }

    #[test]
    fn test_load_empty_storage() {
        let fixture = setup_test();
        assert!(fixture.service.plants().is_empty());
    }

    #[test]
    fn test_load_corrupt_storage_fails_fast() {
        let slots = MemorySlotStorage::with_slot("plants", "{not json");
        let result = PlantService::load(
            Arc::new(PlantRepository::new(slots)),
            Arc::new(ManualClock::new(t0())),
        );

        assert!(matches!(result, Err(PlantError::CorruptState { .. })));
    }

    #[test]
    fn test_add_plant_persists_immediately() {
        let mut fixture = setup_test();

        let result = fixture.service.add_plant(add_command("Basil", 2)).unwrap();
        assert_eq!(result.plant.name, "Basil");
        assert_eq!(result.plant.last_watered, t0());

        assert_eq!(reload_from(&fixture.slots), fixture.service.plants());
    }

    #[test]
    fn test_add_invalid_plant_changes_nothing() {
        let mut fixture = setup_test();
        fixture.service.add_plant(add_command("Basil", 2)).unwrap();
        let before = fixture.slots.read_slot("plants").unwrap();

        let error = fixture.service.add_plant(add_command("", 400)).unwrap_err();
        match error {
            PlantError::Validation(e) => {
                assert!(e.contains(&PlantFieldError::EmptyName));
                assert!(e.contains(&PlantFieldError::FrequencyOutOfRange(400)));
            }
            other => panic!("unexpected error: {:?}", other),
        }

        assert_eq!(fixture.service.plants().len(), 1);
        assert_eq!(fixture.slots.read_slot("plants").unwrap(), before);
    }

    #[test]
    fn test_water_plant_moves_last_watered_forward() {
        let mut fixture = setup_test();
        let plant = fixture.service.add_plant(add_command("Basil", 2)).unwrap().plant;

        fixture.clock.advance(Duration::hours(30));
        let watered = fixture
            .service
            .water_plant(WaterPlantCommand {
                plant_id: plant.id.clone(),
            })
            .unwrap()
            .plant
            .expect("plant should exist");

        assert_eq!(watered.last_watered, t0() + Duration::hours(30));
        assert!(watered.last_watered > plant.last_watered);
        assert_eq!(reload_from(&fixture.slots)[0].last_watered, watered.last_watered);
    }

    #[test]
    fn test_water_twice_same_instant() {
        let mut fixture = setup_test();
        let plant = fixture.service.add_plant(add_command("Basil", 2)).unwrap().plant;
        fixture.clock.advance(Duration::days(1));

        let command = WaterPlantCommand { plant_id: plant.id };
        let first = fixture.service.water_plant(command.clone()).unwrap().plant;
        let second = fixture.service.water_plant(command).unwrap().plant;
        assert_eq!(first, second);
    }

    #[test]
    fn test_water_unknown_plant_is_not_an_error() {
        let mut fixture = setup_test();
        fixture.service.add_plant(add_command("Basil", 2)).unwrap();
        let before = fixture.service.plants().to_vec();

        let result = fixture
            .service
            .water_plant(WaterPlantCommand {
                plant_id: "plant::missing".to_string(),
            })
            .unwrap();

        assert!(result.plant.is_none());
        assert_eq!(fixture.service.plants(), before.as_slice());
    }

    #[test]
    fn test_remove_plant_then_remove_again() {
        let mut fixture = setup_test();
        let first = fixture.service.add_plant(add_command("Basil", 2)).unwrap().plant;
        fixture.service.add_plant(add_command("Mint", 3)).unwrap();

        let command = RemovePlantCommand {
            plant_id: first.id.clone(),
        };
        let removed = fixture.service.remove_plant(command.clone()).unwrap();
        assert_eq!(removed.removed, Some(first));
        assert_eq!(fixture.service.plants().len(), 1);

        let again = fixture.service.remove_plant(command).unwrap();
        assert!(again.removed.is_none());
        assert_eq!(fixture.service.plants().len(), 1);

        let stored = reload_from(&fixture.slots);
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Mint");
    }

    #[test]
    fn test_insertion_order_survives_reload() {
        let mut fixture = setup_test();
        for name in ["a", "b", "c"] {
            fixture.service.add_plant(add_command(name, 5)).unwrap();
        }

        let names: Vec<String> = reload_from(&fixture.slots)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reload_picks_up_external_changes() {
        let mut fixture = setup_test();
        fixture.service.add_plant(add_command("Basil", 2)).unwrap();

        fixture.slots.write_slot("plants", "[]").unwrap();
        fixture.service.reload().unwrap();
        assert!(fixture.service.plants().is_empty());
    }

    #[test]
    fn test_plant_due_today_then_overdue() {
        let mut fixture = setup_test();
        let plant = fixture.service.add_plant(add_command("Fern", 5)).unwrap().plant;

        fixture.clock.set(t0() + Duration::days(5));
        let days = days_until_watering(plant.last_watered, plant.watering_frequency, fixture.clock.now());
        assert_eq!(days, 0);
        assert_eq!(status_label(days), "Due today");

        fixture.clock.set(t0() + Duration::days(6));
        let days = days_until_watering(plant.last_watered, plant.watering_frequency, fixture.clock.now());
        assert_eq!(days, -1);
        assert_eq!(status_label(days), "Overdue by 1 days");
    }

    #[test]
    fn test_failed_save_leaves_plants_unchanged() {
        let mut fixture = setup_test();
        let plant = fixture.service.add_plant(add_command("Basil", 2)).unwrap().plant;
        let before = fixture.service.plants().to_vec();

        let mut service = PlantService::load(
            Arc::new(PlantRepository::new(ReadOnlySlots {
                inner: fixture.slots.clone(),
            })),
            Arc::new(fixture.clock.clone()),
        )
        .unwrap();
        fixture.clock.advance(Duration::days(1));

        let added = service.add_plant(add_command("Mint", 3));
        assert!(matches!(added, Err(PlantError::Storage(_))));
        assert_eq!(service.plants(), before.as_slice());

        let watered = service.water_plant(WaterPlantCommand {
            plant_id: plant.id.clone(),
        });
        assert!(watered.is_err());
        assert_eq!(service.plants(), before.as_slice());

        let removed = service.remove_plant(RemovePlantCommand { plant_id: plant.id });
        assert!(removed.is_err());
        assert_eq!(service.plants(), before.as_slice());

        assert_eq!(reload_from(&fixture.slots), before);
    }
}
