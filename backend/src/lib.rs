//! Plant catalogue library modules.
//!
//! - [`domain`]: records, filter vocabularies, the catalogue service, and the
//!   ports it depends on.
//! - [`inbound`]: the actix-web HTTP adapter.
//! - [`outbound`]: repository and option store adapters.
//! - [`config`]: OrthoConfig-backed settings.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
