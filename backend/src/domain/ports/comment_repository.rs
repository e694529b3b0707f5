//! Port for comment persistence.

use async_trait::async_trait;

use crate::domain::{Comment, PlantId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by comment repository adapters.
    pub enum CommentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "comment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "comment repository query failed: {message}",
    }
}

/// Port for comment storage and retrieval.
///
/// Adapters need not order results; the catalogue service sorts comments
/// newest first before returning them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Fetch every comment attached to `plant_id`.
    ///
    /// Returns an empty vector when the plant has no comments.
    async fn list_for_plant(
        &self,
        plant_id: &PlantId,
    ) -> Result<Vec<Comment>, CommentRepositoryError>;

    /// Append a new comment. The plant reference is not checked.
    async fn insert(&self, comment: &Comment) -> Result<(), CommentRepositoryError>;

    /// Remove every comment attached to `plant_id`, returning how many were
    /// removed.
    async fn delete_for_plant(&self, plant_id: &PlantId) -> Result<usize, CommentRepositoryError>;
}
