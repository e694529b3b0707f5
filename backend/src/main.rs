//! Plant catalogue entry-point: loads settings, wires adapters, and serves
//! the REST API.

mod server;

use std::env;

use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use plant_catalogue::config::CatalogueSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = CatalogueSettings::load_from_iter(env::args_os())
        .map_err(|error| eyre!("failed to load settings: {error}"))?;
    let bind_addr = settings.bind_addr()?;
    let http_state = server::build_http_state(&settings).await?;

    let server = server::create_server(http_state, bind_addr)
        .wrap_err_with(|| format!("bind {bind_addr}"))?;
    info!(%bind_addr, "plant catalogue listening");
    server.await.wrap_err("server terminated")?;
    Ok(())
}
