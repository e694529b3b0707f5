//! Driving port for plant catalogue read use-cases.

use async_trait::async_trait;

use crate::domain::{Comment, Error, FilterCategory, Plant, PlantFilter, PlantId};

/// Read-side use-cases offered to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlantCatalogueQuery: Send + Sync {
    /// List plants matching `filter`, in catalogue order.
    async fn list_plants(&self, filter: &PlantFilter) -> Result<Vec<Plant>, Error>;

    /// Fetch a single plant; `None` when the identifier is unknown.
    async fn get_plant(&self, id: &PlantId) -> Result<Option<Plant>, Error>;

    /// List comments on a plant, newest first.
    async fn list_comments(&self, plant_id: &PlantId) -> Result<Vec<Comment>, Error>;

    /// Vocabulary offered to the filter control for `category`.
    ///
    /// Values are unique and sorted ascending.
    async fn filter_options(&self, category: FilterCategory) -> Result<Vec<String>, Error>;
}
