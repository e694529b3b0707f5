//! Domain primitives, services, and ports.
//!
//! Purpose: define the plant catalogue entities and the use-cases that act on
//! them. Adapters depend on this module; it never depends on adapters.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable identifier.
//! - Plant, PlantDraft, PlantPatch, Comment, CommentDraft: catalogue records
//!   and their write payloads.
//! - PlantFilter: listing criteria.
//! - OptionCategory / FilterCategory: filter vocabularies.
//! - DynamicOptionRegistry: user-added filter values mirrored to an option
//!   store.
//! - PlantCatalogueService: implementation of the driving ports.
//! - PlantCard: card view model.

pub mod error;
pub mod ports;

mod catalogue_service;
mod comment;
mod filter;
mod option_registry;
mod plant;
mod plant_card;
mod seed;
mod vocabulary;

pub use self::catalogue_service::PlantCatalogueService;
pub use self::comment::{Comment, CommentDraft, CommentId, sort_newest_first};
pub use self::error::{Error, ErrorCode};
pub use self::filter::{ALL_OPTIONS, PlantFilter};
pub use self::option_registry::DynamicOptionRegistry;
pub use self::plant::{DEFAULT_PLANT_IMAGE_URL, Plant, PlantDraft, PlantId, PlantPatch, TagInput};
pub use self::plant_card::{
    AdminActions, AuthContext, AuthUser, PlantCard, Role, SUMMARY_TAG_LIMIT, TRUNCATION_MARKER,
    TagSummary, confirm_delete, resolve_image,
};
pub use self::seed::{seed_comments, seed_plants};
pub use self::vocabulary::{
    BASE_CLIMATES, BASE_LOCATIONS, BASE_USES, FilterCategory, OptionCategory, SEASONS,
    UnknownCategory, merge_options,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use plant_catalogue::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("no such plant"))
/// }
/// # assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
