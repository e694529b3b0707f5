//! Filter vocabularies: static base lists and option categories.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Plant;

/// Locations offered before any plant or user contributes one.
pub const BASE_LOCATIONS: &[&str] = &["Amazonía", "Andes", "Costa", "Selva", "Sierra"];

/// Climates offered before any plant or user contributes one.
pub const BASE_CLIMATES: &[&str] = &["Cálido", "Frío", "Templado", "Tropical"];

/// Uses offered before any plant or user contributes one.
pub const BASE_USES: &[&str] = &["aromático", "culinario", "medicinal", "ornamental"];

/// Fixed season vocabulary, already in ascending order.
pub const SEASONS: &[&str] = &["Invierno", "Otoño", "Primavera", "Todo el año", "Verano"];

/// Categories whose vocabulary users may extend at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionCategory {
    /// Plant location tags.
    Locations,
    /// Plant climate tags.
    Climates,
    /// Plant use tags.
    Uses,
}

impl OptionCategory {
    /// Every dynamic category, in storage order.
    pub const ALL: [Self; 3] = [Self::Locations, Self::Climates, Self::Uses];

    /// Key under which the category's dynamic entries are persisted.
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Locations => "dynamic_locations",
            Self::Climates => "dynamic_climates",
            Self::Uses => "dynamic_uses",
        }
    }

    /// Static base vocabulary for the category.
    pub const fn base_vocabulary(self) -> &'static [&'static str] {
        match self {
            Self::Locations => BASE_LOCATIONS,
            Self::Climates => BASE_CLIMATES,
            Self::Uses => BASE_USES,
        }
    }

    /// Values `plant` contributes to this category.
    pub fn plant_values(self, plant: &Plant) -> Vec<&str> {
        match self {
            Self::Locations => plant.location.iter().map(String::as_str).collect(),
            Self::Climates => vec![plant.climate.as_str()],
            Self::Uses => plant.uses.iter().map(String::as_str).collect(),
        }
    }

    /// Path segment naming the category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Locations => "locations",
            Self::Climates => "climates",
            Self::Uses => "uses",
        }
    }
}

impl fmt::Display for OptionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter category: {0}")]
pub struct UnknownCategory(pub String);

/// Any vocabulary exposed to filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCategory {
    /// A category with base, plant-derived, and dynamic values.
    Dynamic(OptionCategory),
    /// The fixed season list.
    Seasons,
}

impl FromStr for FilterCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "locations" => Ok(Self::Dynamic(OptionCategory::Locations)),
            "climates" => Ok(Self::Dynamic(OptionCategory::Climates)),
            "uses" => Ok(Self::Dynamic(OptionCategory::Uses)),
            "seasons" => Ok(Self::Seasons),
            other => Err(UnknownCategory(other.to_owned())),
        }
    }
}

/// Deduplicate and sort the union of the given values.
///
/// # Examples
///
/// ```
/// use plant_catalogue::domain::merge_options;
///
/// let merged = merge_options(["Sierra", "Andes", "Sierra"]);
/// assert_eq!(merged, vec!["Andes", "Sierra"]);
/// ```
pub fn merge_options<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    values
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}
