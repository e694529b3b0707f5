//! In-memory plant repository.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{PlantRepository, PlantRepositoryError};
use crate::domain::{Plant, PlantFilter, PlantId};

/// Plant repository holding records in an ordered vector.
///
/// Locks are held only for the duration of a single operation and never
/// across an `.await`.
#[derive(Debug, Default)]
pub struct InMemoryPlantRepository {
    plants: RwLock<Vec<Plant>>,
}

impl InMemoryPlantRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with `plants`, in the given order.
    pub fn with_plants(plants: impl IntoIterator<Item = Plant>) -> Self {
        Self {
            plants: RwLock::new(plants.into_iter().collect()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Plant>>, PlantRepositoryError> {
        self.plants
            .read()
            .map_err(|_| PlantRepositoryError::query("plant store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Plant>>, PlantRepositoryError> {
        self.plants
            .write()
            .map_err(|_| PlantRepositoryError::query("plant store lock poisoned"))
    }
}

#[async_trait]
impl PlantRepository for InMemoryPlantRepository {
    async fn list(&self, filter: &PlantFilter) -> Result<Vec<Plant>, PlantRepositoryError> {
        let plants = self.read()?;
        Ok(plants
            .iter()
            .filter(|plant| filter.matches(plant))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &PlantId) -> Result<Option<Plant>, PlantRepositoryError> {
        let plants = self.read()?;
        Ok(plants.iter().find(|plant| &plant.id == id).cloned())
    }

    async fn insert(&self, plant: &Plant) -> Result<(), PlantRepositoryError> {
        let mut plants = self.write()?;
        if plants.iter().any(|existing| existing.id == plant.id) {
            return Err(PlantRepositoryError::duplicate_id(plant.id.as_str()));
        }
        plants.push(plant.clone());
        Ok(())
    }

    async fn replace(&self, plant: &Plant) -> Result<bool, PlantRepositoryError> {
        let mut plants = self.write()?;
        match plants.iter_mut().find(|existing| existing.id == plant.id) {
            Some(slot) => {
                *slot = plant.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &PlantId) -> Result<bool, PlantRepositoryError> {
        let mut plants = self.write()?;
        let before = plants.len();
        plants.retain(|plant| &plant.id != id);
        Ok(plants.len() != before)
    }
}
