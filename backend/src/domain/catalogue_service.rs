//! Plant catalogue domain service.
//!
//! Implements the driving ports over the plant and comment repositories and
//! the dynamic option registry. The service owns identifiers, timestamps,
//! merge rules, and the delete cascade; adapters only store records.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::ports::{
    CommentRepository, CommentRepositoryError, PlantCatalogueCommand, PlantCatalogueQuery,
    PlantRepository, PlantRepositoryError,
};
use crate::domain::{
    Comment, CommentDraft, CommentId, DynamicOptionRegistry, Error, FilterCategory,
    OptionCategory, Plant, PlantDraft, PlantFilter, PlantId, PlantPatch, SEASONS, merge_options,
    sort_newest_first,
};

/// Strictly increasing millisecond identifiers.
///
/// Two creations within the same millisecond still receive distinct ids.
#[derive(Debug, Default)]
struct IdSequence {
    last: AtomicI64,
}

impl IdSequence {
    fn next(&self, now_millis: i64) -> i64 {
        let previous = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(now_millis.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);
        now_millis.max(previous.saturating_add(1))
    }
}

/// Catalogue service implementing [`PlantCatalogueQuery`] and
/// [`PlantCatalogueCommand`].
pub struct PlantCatalogueService {
    plants: Arc<dyn PlantRepository>,
    comments: Arc<dyn CommentRepository>,
    options: Arc<DynamicOptionRegistry>,
    clock: Arc<dyn Clock>,
    plant_ids: IdSequence,
    comment_ids: IdSequence,
}

impl PlantCatalogueService {
    /// Create a service over the given adapters.
    pub fn new(
        plants: Arc<dyn PlantRepository>,
        comments: Arc<dyn CommentRepository>,
        options: Arc<DynamicOptionRegistry>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            plants,
            comments,
            options,
            clock,
            plant_ids: IdSequence::default(),
            comment_ids: IdSequence::default(),
        }
    }

    fn map_plant_error(error: PlantRepositoryError) -> Error {
        match error {
            PlantRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("plant repository unavailable: {message}"))
            }
            PlantRepositoryError::Query { message } => {
                Error::internal(format!("plant repository error: {message}"))
            }
            PlantRepositoryError::DuplicateId { id } => {
                Error::internal(format!("generated plant id already in use: {id}"))
            }
        }
    }

    fn map_comment_error(error: CommentRepositoryError) -> Error {
        match error {
            CommentRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("comment repository unavailable: {message}"))
            }
            CommentRepositoryError::Query { message } => {
                Error::internal(format!("comment repository error: {message}"))
            }
        }
    }

    fn plant_not_found(id: &PlantId) -> Error {
        Error::not_found(format!("plant {id} not found"))
    }

    async fn dynamic_options(&self, category: OptionCategory) -> Result<Vec<String>, Error> {
        let plants = self
            .plants
            .list(&PlantFilter::default())
            .await
            .map_err(Self::map_plant_error)?;
        let dynamic = self.options.entries(category).await?;

        let values = category
            .base_vocabulary()
            .iter()
            .copied()
            .chain(plants.iter().flat_map(|plant| category.plant_values(plant)))
            .chain(dynamic.iter().map(String::as_str));
        Ok(merge_options(values))
    }
}

#[async_trait]
impl PlantCatalogueQuery for PlantCatalogueService {
    async fn list_plants(&self, filter: &PlantFilter) -> Result<Vec<Plant>, Error> {
        self.plants
            .list(filter)
            .await
            .map_err(Self::map_plant_error)
    }

    async fn get_plant(&self, id: &PlantId) -> Result<Option<Plant>, Error> {
        self.plants
            .find_by_id(id)
            .await
            .map_err(Self::map_plant_error)
    }

    async fn list_comments(&self, plant_id: &PlantId) -> Result<Vec<Comment>, Error> {
        let mut comments = self
            .comments
            .list_for_plant(plant_id)
            .await
            .map_err(Self::map_comment_error)?;
        sort_newest_first(&mut comments);
        Ok(comments)
    }

    async fn filter_options(&self, category: FilterCategory) -> Result<Vec<String>, Error> {
        match category {
            FilterCategory::Dynamic(category) => self.dynamic_options(category).await,
            FilterCategory::Seasons => Ok(SEASONS
                .iter()
                .map(|season| (*season).to_owned())
                .collect()),
        }
    }
}

#[async_trait]
impl PlantCatalogueCommand for PlantCatalogueService {
    async fn create_plant(&self, draft: PlantDraft) -> Result<Plant, Error> {
        let now = self.clock.utc();
        let id = PlantId::new(self.plant_ids.next(now.timestamp_millis()).to_string());
        let plant = Plant::from_draft(id, draft, now);

        self.plants
            .insert(&plant)
            .await
            .map_err(Self::map_plant_error)?;
        info!(plant_id = %plant.id, name = %plant.name, "plant created");
        Ok(plant)
    }

    async fn update_plant(&self, id: &PlantId, patch: PlantPatch) -> Result<Plant, Error> {
        let Some(mut plant) = self
            .plants
            .find_by_id(id)
            .await
            .map_err(Self::map_plant_error)?
        else {
            warn!(plant_id = %id, "update requested for unknown plant");
            return Err(Self::plant_not_found(id));
        };

        plant.apply(patch, self.clock.utc());
        let replaced = self
            .plants
            .replace(&plant)
            .await
            .map_err(Self::map_plant_error)?;
        if !replaced {
            warn!(plant_id = %id, "plant disappeared during update");
            return Err(Self::plant_not_found(id));
        }

        info!(plant_id = %id, "plant updated");
        Ok(plant)
    }

    async fn delete_plant(&self, id: &PlantId) -> Result<(), Error> {
        let removed = self
            .plants
            .delete(id)
            .await
            .map_err(Self::map_plant_error)?;
        let cascaded = self
            .comments
            .delete_for_plant(id)
            .await
            .map_err(Self::map_comment_error)?;
        info!(plant_id = %id, removed, cascaded, "plant deleted");
        Ok(())
    }

    async fn add_comment(&self, plant_id: &PlantId, draft: CommentDraft) -> Result<Comment, Error> {
        let now = self.clock.utc();
        let id = CommentId::new(format!("c{}", self.comment_ids.next(now.timestamp_millis())));
        let comment = Comment::from_draft(id, plant_id.clone(), draft, now);

        self.comments
            .insert(&comment)
            .await
            .map_err(Self::map_comment_error)?;
        info!(plant_id = %plant_id, comment_id = %comment.id, "comment added");
        Ok(comment)
    }

    async fn add_option(&self, category: OptionCategory, value: &str) -> Result<(), Error> {
        if value.trim().is_empty() {
            return Err(Error::invalid_request("option value must not be blank"));
        }
        self.options.add(category, value).await?;
        Ok(())
    }

    async fn delete_option(&self, category: OptionCategory, value: &str) -> Result<(), Error> {
        self.options.delete(category, value).await
    }
}

#[cfg(test)]
mod tests;
