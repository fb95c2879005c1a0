//! Backend entry-point: loads settings, prepares SQLite storage and serves the
//! todo REST API.

mod server;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig, ensure_schema};
use backend::settings::TodoSettings;
use server::{ServerConfig, create_server};

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

    let settings = TodoSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings
        .bind_addr()
        .wrap_err("failed to resolve bind address")?;

    let pool_config = PoolConfig::new(settings.database_url.as_str())
        .with_max_size(settings.pool_max_size)
        .with_min_idle(Some(settings.pool_min_idle))
        .with_connection_timeout(settings.pool_timeout());
    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("failed to open todo database")?;
    ensure_schema(&pool)
        .await
        .wrap_err("failed to prepare todo schema")?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, pool).with_cors_origins(settings.cors_origins());
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(initialize_metrics(|| {
        PrometheusMetricsBuilder::new("todo")
            .endpoint("/metrics")
            .build()
    }));

    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, database = %settings.database_url, "todo server listening");
    server.await?;
    health_state.mark_unhealthy();
    Ok(())
}

/// Build Prometheus middleware, logging and continuing without metrics when
/// construction fails.
#[cfg(feature = "metrics")]
fn initialize_metrics<F, E>(build: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> std::result::Result<PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    match build() {
        Ok(metrics) => Some(metrics),
        Err(e) => {
            warn!(error = %e, "Prometheus metrics unavailable; continuing without /metrics");
            None
        }
    }
}

#[cfg(test)]
mod tests;
