//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod catalogue_command;
mod catalogue_query;
mod comment_repository;
mod option_store;
mod plant_repository;

#[cfg(test)]
pub use catalogue_command::MockPlantCatalogueCommand;
pub use catalogue_command::PlantCatalogueCommand;
#[cfg(test)]
pub use catalogue_query::MockPlantCatalogueQuery;
pub use catalogue_query::PlantCatalogueQuery;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use comment_repository::{CommentRepository, CommentRepositoryError};
#[cfg(test)]
pub use option_store::MockOptionStore;
pub use option_store::{OptionStore, OptionStoreError};
#[cfg(test)]
pub use plant_repository::MockPlantRepository;
pub use plant_repository::{PlantRepository, PlantRepositoryError};
