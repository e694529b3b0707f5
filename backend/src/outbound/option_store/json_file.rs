//! File-backed option store: one JSON array per key.
//!
//! Each key `k` is stored as `k.json` inside the configured directory. Writes
//! go to a staging file first and are then renamed over the target, so a
//! reader never observes a half-written list. File I/O is blocking and runs
//! on the tokio blocking pool.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use tokio::task;
use tracing::debug;

use crate::domain::ports::{OptionStore, OptionStoreError};

/// Option store persisting each key as a JSON file in a directory.
#[derive(Debug)]
pub struct JsonFileOptionStore {
    root: PathBuf,
    dir: Arc<Dir>,
}

impl JsonFileOptionStore {
    /// Open (creating if needed) the store directory at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`OptionStoreError::Io`] when the directory cannot be created
    /// or opened.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, OptionStoreError> {
        let root = root.into();
        let describe =
            |error: io::Error| OptionStoreError::io(root.display().to_string(), error.to_string());
        Dir::create_ambient_dir_all(&root, ambient_authority()).map_err(describe)?;
        let dir = Dir::open_ambient_dir(&root, ambient_authority()).map_err(describe)?;
        Ok(Self {
            root,
            dir: Arc::new(dir),
        })
    }

    /// Directory holding the option files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run blocking directory I/O on the tokio blocking pool.
    async fn blocking<T, F>(&self, key: &str, operation: F) -> Result<T, OptionStoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Dir) -> io::Result<T> + Send + 'static,
    {
        let dir = Arc::clone(&self.dir);
        task::spawn_blocking(move || operation(&dir))
            .await
            .map_err(|error| OptionStoreError::io(key, error.to_string()))?
            .map_err(|error| OptionStoreError::io(key, error.to_string()))
    }

    fn file_name(key: &str) -> Result<PathBuf, OptionStoreError> {
        let is_plain = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !is_plain {
            return Err(OptionStoreError::io(
                key,
                "keys may only contain ASCII letters, digits, '_' or '-'",
            ));
        }
        Ok(PathBuf::from(format!("{key}.json")))
    }
}

#[async_trait]
impl OptionStore for JsonFileOptionStore {
    async fn read(&self, key: &str) -> Result<Vec<String>, OptionStoreError> {
        let file_name = Self::file_name(key)?;
        let payload = self
            .blocking(key, move |dir| match dir.read(&file_name) {
                Ok(payload) => Ok(Some(payload)),
                Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(error) => Err(error),
            })
            .await?;
        let Some(payload) = payload else {
            return Ok(Vec::new());
        };
        let values: Vec<String> = serde_json::from_slice(&payload)
            .map_err(|error| OptionStoreError::serialization(key, error.to_string()))?;
        debug!(key, count = values.len(), "option file read");
        Ok(values)
    }

    async fn contains(&self, key: &str) -> Result<bool, OptionStoreError> {
        let file_name = Self::file_name(key)?;
        self.blocking(key, move |dir| Ok(dir.exists(file_name))).await
    }

    async fn write(&self, key: &str, values: &[String]) -> Result<(), OptionStoreError> {
        let file_name = Self::file_name(key)?;
        let staging = PathBuf::from(format!(".{key}.json.tmp"));
        let payload = serde_json::to_vec(values)
            .map_err(|error| OptionStoreError::serialization(key, error.to_string()))?;

        self.blocking(key, move |dir| {
            dir.write(&staging, payload)?;
            dir.rename(&staging, dir, &file_name)
        })
        .await?;
        debug!(key, count = values.len(), "option file written");
        Ok(())
    }
}
