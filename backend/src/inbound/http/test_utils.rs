//! Shared helpers for HTTP handler tests.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::{DateTime, Utc};
use mockable::DefaultClock;

use crate::domain::{DynamicOptionRegistry, PlantCatalogueService, seed_comments, seed_plants};
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryCommentRepository, InMemoryPlantRepository};
use crate::outbound::option_store::MemoryOptionStore;

/// HTTP state over a seeded, in-memory catalogue.
pub async fn seeded_state() -> HttpState {
    let now: DateTime<Utc> = Utc::now();
    let registry = DynamicOptionRegistry::load(Arc::new(MemoryOptionStore::new()))
        .await
        .expect("load registry");
    let service = PlantCatalogueService::new(
        Arc::new(InMemoryPlantRepository::with_plants(seed_plants(now))),
        Arc::new(InMemoryCommentRepository::with_comments(seed_comments(now))),
        Arc::new(registry),
        Arc::new(DefaultClock),
    );
    HttpState::from_service(Arc::new(service))
}

/// Application mounting the catalogue endpoints under `/api/v1`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .service(web::scope("/api/v1").configure(configure))
}
