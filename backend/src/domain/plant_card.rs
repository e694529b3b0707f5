//! Card view model for presenting a plant in a catalogue grid.
//!
//! The card resolves the image to show, condenses the location and use tags,
//! and decides whether admin actions are offered for the current viewer.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ports::PlantCatalogueCommand;
use super::{DEFAULT_PLANT_IMAGE_URL, Error, Plant, PlantId};

/// Tags shown before a summary is truncated.
pub const SUMMARY_TAG_LIMIT: usize = 2;

/// Marker appended to a truncated tag summary.
pub const TRUNCATION_MARKER: &str = "...";

/// Role carried by an authenticated viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Catalogue administrator.
    Admin,
    /// Regular signed-in user.
    User,
}

/// Authenticated viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Viewer role.
    pub role: Role,
}

/// Authentication state observed by the card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    /// Signed-in viewer, if any.
    pub user: Option<AuthUser>,
    /// Whether authentication is still being resolved.
    pub loading: bool,
}

impl AuthContext {
    /// Resolved context for a signed-in viewer with `role`.
    pub fn signed_in(role: Role) -> Self {
        Self {
            user: Some(AuthUser { role }),
            loading: false,
        }
    }

    /// Context while authentication is still pending.
    pub fn loading() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    /// Admin privileges only count once loading has finished.
    pub fn is_admin(&self) -> bool {
        !self.loading
            && self
                .user
                .as_ref()
                .is_some_and(|user| user.role == Role::Admin)
    }
}

/// The first few tags of a list, flagged when more exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagSummary {
    /// Leading tags, at most [`SUMMARY_TAG_LIMIT`].
    pub shown: Vec<String>,
    /// Whether tags were omitted.
    pub truncated: bool,
}

impl TagSummary {
    /// Summarise `tags`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plant_catalogue::domain::TagSummary;
    ///
    /// let tags = ["Costa".to_owned(), "Selva".to_owned(), "Sierra".to_owned()];
    /// assert_eq!(TagSummary::from_tags(&tags).to_string(), "Costa, Selva...");
    /// ```
    pub fn from_tags(tags: &[String]) -> Self {
        Self {
            shown: tags.iter().take(SUMMARY_TAG_LIMIT).cloned().collect(),
            truncated: tags.len() > SUMMARY_TAG_LIMIT,
        }
    }
}

impl fmt::Display for TagSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.shown.join(", "))?;
        if self.truncated {
            f.write_str(TRUNCATION_MARKER)?;
        }
        Ok(())
    }
}

/// Actions offered to administrators on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminActions {
    /// Plant targeted by edit and delete.
    pub plant_id: PlantId,
    /// Plant name used in the delete confirmation.
    pub plant_name: String,
}

/// Presentation model for a single plant card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantCard {
    /// Plant identifier.
    pub id: PlantId,
    /// Link to the plant detail view.
    pub detail_path: String,
    /// Card title.
    pub name: String,
    /// Card body.
    pub description: String,
    /// Image to display, never blank.
    pub image_url: String,
    /// Leading location tags.
    pub locations: TagSummary,
    /// Leading use tags.
    pub uses: TagSummary,
    /// Present only for resolved administrators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_actions: Option<AdminActions>,
}

impl PlantCard {
    /// Build the card for `plant` as seen through `auth`.
    pub fn new(plant: &Plant, auth: &AuthContext) -> Self {
        Self {
            id: plant.id.clone(),
            detail_path: format!("/plants/{}", plant.id),
            name: plant.name.clone(),
            description: plant.description.clone(),
            image_url: resolve_image(&plant.image_url).to_owned(),
            locations: TagSummary::from_tags(&plant.location),
            uses: TagSummary::from_tags(&plant.uses),
            admin_actions: auth.is_admin().then(|| AdminActions {
                plant_id: plant.id.clone(),
                plant_name: plant.name.clone(),
            }),
        }
    }
}

/// Image to display for `image_url`, falling back to the generic picture.
pub fn resolve_image(image_url: &str) -> &str {
    if image_url.trim().is_empty() {
        DEFAULT_PLANT_IMAGE_URL
    } else {
        image_url
    }
}

/// Delete `id` through the catalogue and notify `on_deleted` once it succeeds.
///
/// The callback is not invoked when the deletion fails.
///
/// # Errors
///
/// Propagates the catalogue error unchanged.
pub async fn confirm_delete<F>(
    catalogue: &dyn PlantCatalogueCommand,
    id: &PlantId,
    on_deleted: F,
) -> Result<(), Error>
where
    F: FnOnce(&PlantId),
{
    catalogue.delete_plant(id).await?;
    on_deleted(id);
    Ok(())
}
