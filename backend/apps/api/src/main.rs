//! Event registration API server.
//!
//! Startup failures surface through `anyhow`; request-level failures are
//! rendered by each crate's error type as `kernel::error::AppError`.

mod config;

use auth::{PgAuthRepository, TokenGate, auth_router};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use kernel::error::app_error::AppError;
use registry::{PgRegistryRepository, registry_router};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

const DEFAULT_LOG_FILTER: &str = "api=info,auth=info,registry=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;
    tracing::info!("Database ready, migrations applied");

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = build_app(pool, config);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_app(pool: PgPool, config: ServerConfig) -> Router {
    let cors = cors_layer(&config.frontend_origins);
    let gate = TokenGate::new(&config.auth);

    let auth = auth_router(PgAuthRepository::new(pool.clone()), config.auth);
    let registry = registry_router(PgRegistryRepository::new(pool), config.registry, gate);

    auth.merge(registry)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Origins that fail to parse as header values are skipped.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
}

async fn route_not_found() -> AppError {
    AppError::not_found("Route not found")
}
