//! Registry of user-added filter options.
//!
//! The registry keeps one ordered list per [`OptionCategory`] in memory and
//! mirrors every mutation to an [`OptionStore`]. When a list is empty in
//! memory but the store holds an entry for it, the list is reloaded before
//! use, so values written by an earlier process are picked up lazily.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::Error;
use crate::domain::OptionCategory;
use crate::domain::ports::{OptionStore, OptionStoreError};

#[derive(Debug, Default)]
struct DynamicOptions {
    locations: Vec<String>,
    climates: Vec<String>,
    uses: Vec<String>,
}

impl DynamicOptions {
    fn entries_mut(&mut self, category: OptionCategory) -> &mut Vec<String> {
        match category {
            OptionCategory::Locations => &mut self.locations,
            OptionCategory::Climates => &mut self.climates,
            OptionCategory::Uses => &mut self.uses,
        }
    }
}

/// Process-wide dynamic vocabulary backed by an option store.
pub struct DynamicOptionRegistry {
    store: Arc<dyn OptionStore>,
    options: Mutex<DynamicOptions>,
}

impl DynamicOptionRegistry {
    /// Load every category from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read or holds a value that is
    /// not a list of strings.
    pub async fn load(store: Arc<dyn OptionStore>) -> Result<Self, Error> {
        let mut options = DynamicOptions::default();
        for category in OptionCategory::ALL {
            let entries = store
                .read(category.storage_key())
                .await
                .map_err(map_store_error)?;
            debug!(%category, count = entries.len(), "dynamic options loaded");
            *options.entries_mut(category) = entries;
        }

        Ok(Self {
            store,
            options: Mutex::new(options),
        })
    }

    /// Current dynamic entries for `category`, in insertion order.
    pub async fn entries(&self, category: OptionCategory) -> Result<Vec<String>, Error> {
        let mut options = self.options.lock().await;
        let entries = self.resynced(&mut options, category).await?;
        Ok(entries.clone())
    }

    /// Append `value` unless it is already registered.
    ///
    /// Returns `true` when the value was added and persisted. Nothing is
    /// written when the value was already present. The in-memory list only
    /// changes once the store accepted the write.
    pub async fn add(&self, category: OptionCategory, value: &str) -> Result<bool, Error> {
        let mut options = self.options.lock().await;
        let entries = self.resynced(&mut options, category).await?;
        if entries.iter().any(|entry| entry == value) {
            debug!(%category, value, "dynamic option already registered");
            return Ok(false);
        }

        let mut updated = entries.clone();
        updated.push(value.to_owned());
        self.persist(category, &updated).await?;
        *entries = updated;
        info!(%category, value, "dynamic option added");
        Ok(true)
    }

    /// Remove every occurrence of `value` and persist the result.
    ///
    /// The list is written even when nothing was removed. A failed write
    /// leaves the in-memory list untouched.
    pub async fn delete(&self, category: OptionCategory, value: &str) -> Result<(), Error> {
        let mut options = self.options.lock().await;
        let entries = self.resynced(&mut options, category).await?;
        let updated: Vec<String> = entries
            .iter()
            .filter(|entry| *entry != value)
            .cloned()
            .collect();
        let removed = entries.len() - updated.len();

        self.persist(category, &updated).await?;
        *entries = updated;
        info!(%category, value, removed, "dynamic option deleted");
        Ok(())
    }

    async fn resynced<'a>(
        &self,
        options: &'a mut DynamicOptions,
        category: OptionCategory,
    ) -> Result<&'a mut Vec<String>, Error> {
        let key = category.storage_key();
        let entries = options.entries_mut(category);
        if entries.is_empty() && self.store.contains(key).await.map_err(map_store_error)? {
            *entries = self.store.read(key).await.map_err(map_store_error)?;
            debug!(%category, count = entries.len(), "dynamic options resynchronised");
        }
        Ok(entries)
    }

    async fn persist(&self, category: OptionCategory, entries: &[String]) -> Result<(), Error> {
        self.store
            .write(category.storage_key(), entries)
            .await
            .map_err(map_store_error)
    }
}

fn map_store_error(error: OptionStoreError) -> Error {
    match error {
        OptionStoreError::Io { key, message } => Error::service_unavailable(format!(
            "option store unavailable for {key}: {message}"
        )),
        OptionStoreError::Serialization { key, message } => Error::internal(format!(
            "option store holds an invalid value for {key}: {message}"
        )),
    }
}
