//! Option store for environments without a persistent medium.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{OptionStore, OptionStoreError};

/// Option store used when no persistent medium is configured.
///
/// Reads are always empty and writes are discarded, so dynamic options live
/// only in the registry's memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullOptionStore;

#[async_trait]
impl OptionStore for NullOptionStore {
    async fn read(&self, _key: &str) -> Result<Vec<String>, OptionStoreError> {
        Ok(Vec::new())
    }

    async fn contains(&self, _key: &str) -> Result<bool, OptionStoreError> {
        Ok(false)
    }

    async fn write(&self, key: &str, values: &[String]) -> Result<(), OptionStoreError> {
        debug!(key, count = values.len(), "option store write discarded");
        Ok(())
    }
}
