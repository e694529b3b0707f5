//! Builders wiring adapters, the catalogue service, and HTTP state.

use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use mockable::{Clock, DefaultClock};
use tracing::info;

use plant_catalogue::config::CatalogueSettings;
use plant_catalogue::domain::ports::{CommentRepository, OptionStore, PlantRepository};
use plant_catalogue::domain::{
    DynamicOptionRegistry, PlantCatalogueService, seed_comments, seed_plants,
};
use plant_catalogue::inbound::http::state::HttpState;
use plant_catalogue::outbound::latency::Latency;
use plant_catalogue::outbound::memory::{InMemoryCommentRepository, InMemoryPlantRepository};
use plant_catalogue::outbound::option_store::{JsonFileOptionStore, NullOptionStore};

fn plant_repository<T>(repository: T, latency: Option<Duration>) -> Arc<dyn PlantRepository>
where
    T: PlantRepository + 'static,
{
    match latency {
        Some(delay) => Arc::new(Latency::new(repository, delay)),
        None => Arc::new(repository),
    }
}

fn comment_repository<T>(repository: T, latency: Option<Duration>) -> Arc<dyn CommentRepository>
where
    T: CommentRepository + 'static,
{
    match latency {
        Some(delay) => Arc::new(Latency::new(repository, delay)),
        None => Arc::new(repository),
    }
}

fn option_store<T>(store: T, latency: Option<Duration>) -> Arc<dyn OptionStore>
where
    T: OptionStore + 'static,
{
    match latency {
        Some(delay) => Arc::new(Latency::new(store, delay)),
        None => Arc::new(store),
    }
}

fn build_option_store(settings: &CatalogueSettings) -> Result<Arc<dyn OptionStore>> {
    let latency = settings.latency();
    match settings.option_store_dir() {
        Some(dir) => {
            let store = JsonFileOptionStore::open(dir)
                .wrap_err_with(|| format!("open option store at {}", dir.display()))?;
            info!(path = %dir.display(), "persisting filter options to disk");
            Ok(option_store(store, latency))
        }
        None => {
            info!("no option store directory configured; filter options are not persisted");
            Ok(option_store(NullOptionStore, latency))
        }
    }
}

/// Build the catalogue service and wrap it as HTTP state.
///
/// # Errors
///
/// Fails when the option store cannot be opened or its contents cannot be
/// loaded.
pub async fn build_http_state(settings: &CatalogueSettings) -> Result<HttpState> {
    let clock = Arc::new(DefaultClock);
    let latency = settings.latency();
    if let Some(delay) = latency {
        info!(delay_ms = delay.as_millis(), "artificial latency enabled");
    }

    let (plants, comments) = if settings.seed_enabled() {
        let now = clock.utc();
        (
            InMemoryPlantRepository::with_plants(seed_plants(now)),
            InMemoryCommentRepository::with_comments(seed_comments(now)),
        )
    } else {
        info!("seed data disabled; starting with an empty catalogue");
        (
            InMemoryPlantRepository::new(),
            InMemoryCommentRepository::new(),
        )
    };

    let registry = DynamicOptionRegistry::load(build_option_store(settings)?)
        .await
        .wrap_err("load dynamic filter options")?;
    let service = PlantCatalogueService::new(
        plant_repository(plants, latency),
        comment_repository(comments, latency),
        Arc::new(registry),
        clock,
    );
    Ok(HttpState::from_service(Arc::new(service)))
}
