//! Port for the key-value store backing dynamic filter options.
//!
//! Each key maps to an ordered list of strings. Adapters decide how the list
//! is encoded; the persisted adapters use a JSON array per key. A medium that
//! is not available behaves as an empty store.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by option store adapters.
    pub enum OptionStoreError {
        /// The storage medium rejected a read or write.
        Io { key: String, message: String } =>
            "option store I/O failed for {key}: {message}",
        /// A stored value could not be encoded or decoded.
        Serialization { key: String, message: String } =>
            "option store value for {key} is not a string list: {message}",
    }
}

/// Port for reading and writing ordered string lists by key.
///
/// There is no concurrency control: a single writer is assumed and the last
/// write wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OptionStore: Send + Sync {
    /// Read the list stored under `key`.
    ///
    /// Returns an empty list when the key has no entry.
    async fn read(&self, key: &str) -> Result<Vec<String>, OptionStoreError>;

    /// Whether an entry exists for `key`, even an empty list.
    async fn contains(&self, key: &str) -> Result<bool, OptionStoreError>;

    /// Overwrite the list stored under `key`.
    async fn write(&self, key: &str, values: &[String]) -> Result<(), OptionStoreError>;
}
