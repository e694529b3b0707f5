//! Driving port for plant catalogue write use-cases.

use async_trait::async_trait;

use crate::domain::{
    Comment, CommentDraft, Error, OptionCategory, Plant, PlantDraft, PlantId, PlantPatch,
};

/// Write-side use-cases offered to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlantCatalogueCommand: Send + Sync {
    /// Create a plant with a fresh identifier and the default image.
    async fn create_plant(&self, draft: PlantDraft) -> Result<Plant, Error>;

    /// Merge `patch` over an existing plant.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when `id` is unknown.
    async fn update_plant(&self, id: &PlantId, patch: PlantPatch) -> Result<Plant, Error>;

    /// Delete a plant and every comment attached to it.
    ///
    /// Deleting an unknown plant is not an error.
    async fn delete_plant(&self, id: &PlantId) -> Result<(), Error>;

    /// Attach a comment to a plant.
    async fn add_comment(&self, plant_id: &PlantId, draft: CommentDraft) -> Result<Comment, Error>;

    /// Register a user-supplied filter value; a no-op when already present.
    async fn add_option(&self, category: OptionCategory, value: &str) -> Result<(), Error>;

    /// Remove a user-supplied filter value.
    async fn delete_option(&self, category: OptionCategory, value: &str) -> Result<(), Error>;
}
