//! Port for plant persistence.
//!
//! The [`PlantRepository`] trait is the storage seam for plant records. The
//! catalogue service owns identifiers, timestamps, and merge rules; adapters
//! only store whole records and evaluate filter descriptors.

use async_trait::async_trait;

use crate::domain::{Plant, PlantFilter, PlantId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by plant repository adapters.
    pub enum PlantRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "plant repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "plant repository query failed: {message}",
        /// A record with the same identifier already exists.
        DuplicateId { id: String } =>
            "plant already exists: {id}",
    }
}

/// Port for plant storage and retrieval.
///
/// Listing preserves repository (insertion) order. Lookups and deletions of
/// unknown identifiers are not errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlantRepository: Send + Sync {
    /// Return every plant matching `filter`, in repository order.
    async fn list(&self, filter: &PlantFilter) -> Result<Vec<Plant>, PlantRepositoryError>;

    /// Fetch a plant by identifier.
    ///
    /// Returns `None` when no plant carries the identifier.
    async fn find_by_id(&self, id: &PlantId) -> Result<Option<Plant>, PlantRepositoryError>;

    /// Append a new plant.
    ///
    /// Fails with [`PlantRepositoryError::DuplicateId`] when the identifier is
    /// already taken.
    async fn insert(&self, plant: &Plant) -> Result<(), PlantRepositoryError>;

    /// Replace the stored record carrying `plant.id`, keeping its position.
    ///
    /// Returns `Ok(false)` when no such record exists.
    async fn replace(&self, plant: &Plant) -> Result<bool, PlantRepositoryError>;

    /// Remove the plant with the given identifier.
    ///
    /// Returns `Ok(true)` if a plant was removed, `Ok(false)` if it didn't
    /// exist.
    async fn delete(&self, id: &PlantId) -> Result<bool, PlantRepositoryError>;
}
