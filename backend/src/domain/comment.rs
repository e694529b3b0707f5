//! User remarks attached to plants.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PlantId;

/// Opaque comment identifier (`c` followed by the creation timestamp).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(String);

impl CommentId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A remark left by a user on a plant.
///
/// `plant_id` is a weak reference: creating a comment does not check that the
/// plant exists, but deleting the plant removes its comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique identifier.
    pub id: CommentId,
    /// Plant the comment refers to.
    pub plant_id: PlantId,
    /// Author identifier.
    pub user_id: String,
    /// Author display name.
    pub user_name: String,
    /// Comment body.
    pub text: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Author and body of a new comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CommentDraft {
    /// Author identifier.
    pub user_id: String,
    /// Author display name.
    pub user_name: String,
    /// Comment body.
    pub text: String,
}

impl Comment {
    /// Materialise a draft into a comment on `plant_id`.
    pub fn from_draft(
        id: CommentId,
        plant_id: PlantId,
        draft: CommentDraft,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            plant_id,
            user_id: draft.user_id,
            user_name: draft.user_name,
            text: draft.text,
            created_at,
        }
    }
}

/// Order comments newest first. Ties keep their insertion order.
pub fn sort_newest_first(comments: &mut [Comment]) {
    comments.sort_by(|left, right| right.created_at.cmp(&left.created_at));
}
