//! Wardboard REST API server binary.
//!
//! ## Purpose
//! Serves the hospital operations dashboard's read-model over HTTP, with
//! OpenAPI/Swagger documentation.
//!
//! ## Environment Variables
//! - `WARDBOARD_REST_ADDR`: server address (default: "0.0.0.0:3000")
//! - `WARDBOARD_DATA_SOURCE`: `"static"` for the in-memory dataset, or the
//!   base URL of a remote CRUD API (default: static)
//! - `WARDBOARD_CACHE_TTL_SECS`: TTL for cached aggregates (default: 300)

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use wardboard_core::config::{cache_ttl_from_env_value, data_source_from_env_value};
use wardboard_core::{
    CoreConfig, DataSource, DataSourceMode, ReadModelService, RestDataSource, StaticDataSource,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("wardboard_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("WARDBOARD_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let data_source = data_source_from_env_value(std::env::var("WARDBOARD_DATA_SOURCE").ok())?;
    let cache_ttl = cache_ttl_from_env_value(std::env::var("WARDBOARD_CACHE_TTL_SECS").ok())?;
    let config = CoreConfig::new(data_source, cache_ttl)?;

    let source: Arc<dyn DataSource> = match config.data_source() {
        DataSourceMode::Static => Arc::new(StaticDataSource::new()),
        DataSourceMode::Remote(base_url) => Arc::new(RestDataSource::new(base_url.clone())),
    };

    tracing::info!("-- Starting Wardboard REST API on {}", addr);

    let state = AppState {
        service: Arc::new(ReadModelService::new(source, &config)),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
