//! Recipe backend entry-point: loads settings, prepares storage and serves
//! the REST API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use recipe_backend::inbound::http::health::HealthState;
use recipe_backend::inbound::http::session_config::{BuildMode, session_settings_from_env};
use recipe_backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use server::{ServerConfig, ServerSettings, create_server};

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

    let settings = ServerSettings::load_from_process()?;
    let bind_addr = settings.bind_addr()?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .wrap_err("invalid session configuration")?;
    let mut config = ServerConfig::new(session, bind_addr);
    if let Some(accounts) = settings.accounts()? {
        info!(count = accounts.len(), "login accounts configured");
        config = config.with_accounts(accounts);
    }

    if let Some(database_url) = settings.database_url() {
        run_migrations(database_url)
            .await
            .wrap_err("failed to apply database migrations")?;
        let pool = DbPool::new(
            PoolConfig::new(database_url).with_max_size(settings.db_pool_size()?),
        )
        .await
        .wrap_err("failed to build database pool")?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "listening");
    server.await?;
    health_state.mark_unhealthy();
    Ok(())
}
