//! Process-local option store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{OptionStore, OptionStoreError};

/// Option store that keeps entries in memory for the process lifetime.
///
/// Suitable for tests and for deployments that accept losing dynamic options
/// on restart.
#[derive(Debug, Default)]
pub struct MemoryOptionStore {
    entries: Mutex<HashMap<String, Vec<String>>>,
}

impl MemoryOptionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, values)| (key.into(), values.into_iter().map(Into::into).collect()))
            .collect();
        Self {
            entries: Mutex::new(entries),
        }
    }

    fn lock(
        &self,
        key: &str,
    ) -> Result<MutexGuard<'_, HashMap<String, Vec<String>>>, OptionStoreError> {
        self.entries
            .lock()
            .map_err(|_| OptionStoreError::io(key, "memory option store lock poisoned"))
    }
}

#[async_trait]
impl OptionStore for MemoryOptionStore {
    async fn read(&self, key: &str) -> Result<Vec<String>, OptionStoreError> {
        Ok(self.lock(key)?.get(key).cloned().unwrap_or_default())
    }

    async fn contains(&self, key: &str) -> Result<bool, OptionStoreError> {
        Ok(self.lock(key)?.contains_key(key))
    }

    async fn write(&self, key: &str, values: &[String]) -> Result<(), OptionStoreError> {
        self.lock(key)?.insert(key.to_owned(), values.to_vec());
        Ok(())
    }
}
