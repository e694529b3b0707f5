//! Plant records and the payloads used to create and patch them.
//!
//! A [`Plant`] is created from a [`PlantDraft`] and later modified through a
//! [`PlantPatch`]. Neither payload carries an identifier, timestamps, or an
//! image path: those are owned by the catalogue and `image_url` is write-once.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Image path assigned to every newly created plant.
pub const DEFAULT_PLANT_IMAGE_URL: &str = "/images/planta-generica.png";

/// Opaque plant identifier.
///
/// Seed plants use short numeric strings; plants created at runtime use the
/// creation timestamp in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantId(String);

impl PlantId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PlantId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlantId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A catalogued plant species.
///
/// # Examples
///
/// ```
/// # use chrono::Utc;
/// # use plant_catalogue::domain::{Plant, PlantDraft, PlantId, DEFAULT_PLANT_IMAGE_URL};
/// let draft = PlantDraft {
///     name: "Muña".to_owned(),
///     scientific_name: Some("Minthostachys mollis".to_owned()),
///     description: "Arbusto aromático andino.".to_owned(),
///     location: vec!["Andes".to_owned()],
///     climate: "Frío".to_owned(),
///     season: "Todo el año".to_owned(),
///     uses: vec!["medicinal".to_owned()],
/// };
/// let plant = Plant::from_draft(PlantId::new("1"), draft, Utc::now());
///
/// assert_eq!(plant.image_url, DEFAULT_PLANT_IMAGE_URL);
/// assert_eq!(plant.created_at, plant.updated_at);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    /// Unique, immutable identifier.
    pub id: PlantId,
    /// Common name.
    pub name: String,
    /// Botanical name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    /// Free-text description.
    pub description: String,
    /// Location tags in display order.
    pub location: Vec<String>,
    /// Climate tag.
    pub climate: String,
    /// Season tag.
    pub season: String,
    /// Use tags in display order.
    pub uses: Vec<String>,
    /// Image path; fixed at creation.
    pub image_url: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the most recent update.
    pub updated_at: DateTime<Utc>,
}

impl Plant {
    /// Materialise a draft into a plant with the default image.
    pub fn from_draft(id: PlantId, draft: PlantDraft, now: DateTime<Utc>) -> Self {
        let PlantDraft {
            name,
            scientific_name,
            description,
            location,
            climate,
            season,
            uses,
        } = draft;

        Self {
            id,
            name,
            scientific_name,
            description,
            location,
            climate,
            season,
            uses,
            image_url: DEFAULT_PLANT_IMAGE_URL.to_owned(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the supplied patch fields over this record.
    ///
    /// `id`, `image_url`, and `created_at` are never touched; `updated_at` is
    /// always refreshed, even for an empty patch.
    pub fn apply(&mut self, patch: PlantPatch, now: DateTime<Utc>) {
        let PlantPatch {
            name,
            scientific_name,
            description,
            location,
            climate,
            season,
            uses,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(scientific_name) = scientific_name {
            self.scientific_name = Some(scientific_name);
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(location) = location {
            self.location = location.into_tags();
        }
        if let Some(climate) = climate {
            self.climate = climate;
        }
        if let Some(season) = season {
            self.season = season;
        }
        if let Some(uses) = uses {
            self.uses = uses.into_tags();
        }
        self.updated_at = now;
    }
}

/// Fields supplied when creating a plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct PlantDraft {
    /// Common name.
    pub name: String,
    /// Botanical name, when known.
    #[serde(default)]
    pub scientific_name: Option<String>,
    /// Free-text description.
    pub description: String,
    /// Location tags.
    pub location: Vec<String>,
    /// Climate tag.
    pub climate: String,
    /// Season tag.
    pub season: String,
    /// Use tags.
    pub uses: Vec<String>,
}

/// Tag input that accepts either a single tag or a list of tags.
///
/// Form submissions occasionally send a lone string where a list is expected;
/// a single value is stored as a one-element list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagInput {
    /// A lone tag.
    One(String),
    /// An ordered list of tags.
    Many(Vec<String>),
}

impl TagInput {
    /// Normalise into an ordered list of tags.
    pub fn into_tags(self) -> Vec<String> {
        match self {
            Self::One(tag) => vec![tag],
            Self::Many(tags) => tags,
        }
    }
}

impl From<Vec<String>> for TagInput {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

impl From<&str> for TagInput {
    fn from(value: &str) -> Self {
        Self::One(value.to_owned())
    }
}

/// Partial update for a plant. Absent fields leave the record unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct PlantPatch {
    /// Replacement common name.
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement botanical name.
    #[serde(default)]
    pub scientific_name: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement location tags.
    #[serde(default)]
    pub location: Option<TagInput>,
    /// Replacement climate tag.
    #[serde(default)]
    pub climate: Option<String>,
    /// Replacement season tag.
    #[serde(default)]
    pub season: Option<String>,
    /// Replacement use tags.
    #[serde(default)]
    pub uses: Option<TagInput>,
}
