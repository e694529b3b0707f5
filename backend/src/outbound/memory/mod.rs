//! Process-local repository adapters.
//!
//! Records live only for the process lifetime. A durable backend can replace
//! these adapters by implementing the same ports.

mod comment_repository;
mod plant_repository;

pub use comment_repository::InMemoryCommentRepository;
pub use plant_repository::InMemoryPlantRepository;
