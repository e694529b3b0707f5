//! Catalogue ports shared by every HTTP handler through `web::Data`.
//!
//! Handlers see only the driving ports, so tests can swap the service for
//! mocks.

use std::sync::Arc;

use crate::domain::ports::{PlantCatalogueCommand, PlantCatalogueQuery};

/// Read and write catalogue ports used by the handlers.
#[derive(Clone)]
pub struct HttpState {
    pub catalogue: Arc<dyn PlantCatalogueQuery>,
    pub catalogue_commands: Arc<dyn PlantCatalogueCommand>,
}

impl HttpState {
    /// Construct state from the read and write catalogue ports.
    pub fn new(
        catalogue: Arc<dyn PlantCatalogueQuery>,
        catalogue_commands: Arc<dyn PlantCatalogueCommand>,
    ) -> Self {
        Self {
            catalogue,
            catalogue_commands,
        }
    }

    /// Construct state from a single service implementing both ports.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: PlantCatalogueQuery + PlantCatalogueCommand + 'static,
    {
        Self {
            catalogue: service.clone(),
            catalogue_commands: service,
        }
    }
}
