//! Filter descriptor narrowing a plant listing.

use serde::{Deserialize, Serialize};

use super::Plant;

/// Sentinel value that disables a vocabulary filter.
pub const ALL_OPTIONS: &str = "all";

/// Optional constraints applied when listing plants.
///
/// Present fields are ANDed. Empty strings are treated as absent, and the
/// vocabulary fields additionally ignore the [`ALL_OPTIONS`] sentinel.
///
/// # Examples
///
/// ```
/// use plant_catalogue::domain::PlantFilter;
///
/// let filter = PlantFilter::default().with_location("Andes");
/// assert_eq!(filter.location.as_deref(), Some("Andes"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantFilter {
    /// Case-insensitive text matched against name, scientific name,
    /// description, and use tags.
    #[serde(default)]
    pub search_term: Option<String>,
    /// Location tag the plant must carry.
    #[serde(default)]
    pub location: Option<String>,
    /// Climate tag the plant must equal.
    #[serde(default)]
    pub climate: Option<String>,
    /// Season tag the plant must equal.
    #[serde(default)]
    pub season: Option<String>,
    /// Use tag the plant must carry.
    #[serde(default)]
    pub uses: Option<String>,
}

impl PlantFilter {
    /// Constrain by free-text search.
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Constrain by location tag.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Constrain by climate tag.
    pub fn with_climate(mut self, climate: impl Into<String>) -> Self {
        self.climate = Some(climate.into());
        self
    }

    /// Constrain by season tag.
    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    /// Constrain by use tag.
    pub fn with_uses(mut self, uses: impl Into<String>) -> Self {
        self.uses = Some(uses.into());
        self
    }

    /// Whether `plant` satisfies every active constraint.
    pub fn matches(&self, plant: &Plant) -> bool {
        self.matches_search(plant)
            && active_option(self.location.as_deref())
                .is_none_or(|location| plant.location.iter().any(|tag| tag == location))
            && active_option(self.climate.as_deref()).is_none_or(|climate| plant.climate == climate)
            && active_option(self.season.as_deref()).is_none_or(|season| plant.season == season)
            && active_option(self.uses.as_deref())
                .is_none_or(|uses| plant.uses.iter().any(|tag| tag == uses))
    }

    fn matches_search(&self, plant: &Plant) -> bool {
        let Some(term) = self.search_term.as_deref().filter(|term| !term.is_empty()) else {
            return true;
        };
        let needle = term.to_lowercase();
        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

        contains(&plant.name)
            || plant.uses.iter().any(|tag| contains(tag))
            || plant.scientific_name.as_deref().is_some_and(contains)
            || contains(&plant.description)
    }
}

fn active_option(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty() && *value != ALL_OPTIONS)
}
