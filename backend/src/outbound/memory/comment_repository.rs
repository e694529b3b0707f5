//! In-memory comment repository.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{CommentRepository, CommentRepositoryError};
use crate::domain::{Comment, PlantId};

/// Comment repository holding records in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCommentRepository {
    comments: Mutex<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with `comments`.
    pub fn with_comments(comments: impl IntoIterator<Item = Comment>) -> Self {
        Self {
            comments: Mutex::new(comments.into_iter().collect()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Comment>>, CommentRepositoryError> {
        self.comments
            .lock()
            .map_err(|_| CommentRepositoryError::query("comment store lock poisoned"))
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn list_for_plant(
        &self,
        plant_id: &PlantId,
    ) -> Result<Vec<Comment>, CommentRepositoryError> {
        let comments = self.lock()?;
        Ok(comments
            .iter()
            .filter(|comment| &comment.plant_id == plant_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, comment: &Comment) -> Result<(), CommentRepositoryError> {
        self.lock()?.push(comment.clone());
        Ok(())
    }

    async fn delete_for_plant(&self, plant_id: &PlantId) -> Result<usize, CommentRepositoryError> {
        let mut comments = self.lock()?;
        let before = comments.len();
        comments.retain(|comment| &comment.plant_id != plant_id);
        Ok(before - comments.len())
    }
}
