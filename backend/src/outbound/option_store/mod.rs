//! Option store adapters.
//!
//! - [`JsonFileOptionStore`]: durable, one JSON array per key on disk.
//! - [`MemoryOptionStore`]: process-local map.
//! - [`NullOptionStore`]: no persistent medium; reads empty, discards writes.

mod json_file;
mod memory;
mod null;

pub use json_file::JsonFileOptionStore;
pub use memory::MemoryOptionStore;
pub use null::NullOptionStore;
