//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local plant and comment repositories
//! - **option_store**: JSON-file, in-memory, and null option stores
//! - **latency**: decorator delaying calls to any of the above
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no business logic.

pub mod latency;
pub mod memory;
pub mod option_store;
