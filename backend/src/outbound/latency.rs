//! Artificial latency decorator for driven ports.
//!
//! Demo deployments simulate a remote backend by delaying every port call.
//! The decorator is only installed when settings request it.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ports::{
    CommentRepository, CommentRepositoryError, OptionStore, OptionStoreError, PlantRepository,
    PlantRepositoryError,
};
use crate::domain::{Comment, Plant, PlantFilter, PlantId};

/// Wraps a port and sleeps for `delay` before delegating each call.
#[derive(Debug, Clone)]
pub struct Latency<T> {
    inner: T,
    delay: Duration,
}

impl<T> Latency<T> {
    /// Delay every call to `inner` by `delay`.
    pub fn new(inner: T, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl<T: PlantRepository> PlantRepository for Latency<T> {
    async fn list(&self, filter: &PlantFilter) -> Result<Vec<Plant>, PlantRepositoryError> {
        self.pause().await;
        self.inner.list(filter).await
    }

    async fn find_by_id(&self, id: &PlantId) -> Result<Option<Plant>, PlantRepositoryError> {
        self.pause().await;
        self.inner.find_by_id(id).await
    }

    async fn insert(&self, plant: &Plant) -> Result<(), PlantRepositoryError> {
        self.pause().await;
        self.inner.insert(plant).await
    }

    async fn replace(&self, plant: &Plant) -> Result<bool, PlantRepositoryError> {
        self.pause().await;
        self.inner.replace(plant).await
    }

    async fn delete(&self, id: &PlantId) -> Result<bool, PlantRepositoryError> {
        self.pause().await;
        self.inner.delete(id).await
    }
}

#[async_trait]
impl<T: CommentRepository> CommentRepository for Latency<T> {
    async fn list_for_plant(
        &self,
        plant_id: &PlantId,
    ) -> Result<Vec<Comment>, CommentRepositoryError> {
        self.pause().await;
        self.inner.list_for_plant(plant_id).await
    }

    async fn insert(&self, comment: &Comment) -> Result<(), CommentRepositoryError> {
        self.pause().await;
        self.inner.insert(comment).await
    }

    async fn delete_for_plant(&self, plant_id: &PlantId) -> Result<usize, CommentRepositoryError> {
        self.pause().await;
        self.inner.delete_for_plant(plant_id).await
    }
}

#[async_trait]
impl<T: OptionStore> OptionStore for Latency<T> {
    async fn read(&self, key: &str) -> Result<Vec<String>, OptionStoreError> {
        self.pause().await;
        self.inner.read(key).await
    }

    async fn contains(&self, key: &str) -> Result<bool, OptionStoreError> {
        self.pause().await;
        self.inner.contains(key).await
    }

    async fn write(&self, key: &str, values: &[String]) -> Result<(), OptionStoreError> {
        self.pause().await;
        self.inner.write(key, values).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::memory::InMemoryPlantRepository;
    use crate::outbound::option_store::MemoryOptionStore;
    use rstest::rstest;
    use tokio::time::Instant;

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn delays_each_call_before_delegating() {
        let store = Latency::new(MemoryOptionStore::new(), Duration::from_millis(300));
        let started = Instant::now();

        store
            .write("dynamic_uses", &["textil".to_owned()])
            .await
            .expect("write");
        let values = store.read("dynamic_uses").await.expect("read");

        assert_eq!(values, vec!["textil"]);
        assert!(started.elapsed() >= Duration::from_millis(600));
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn zero_delay_does_not_sleep() {
        let repository = Latency::new(InMemoryPlantRepository::new(), Duration::ZERO);
        let started = Instant::now();

        let plants = repository
            .list(&PlantFilter::default())
            .await
            .expect("list");

        assert!(plants.is_empty());
        assert_eq!(started.elapsed(), Duration::ZERO);
        assert_eq!(repository.delay(), Duration::ZERO);
    }
}
