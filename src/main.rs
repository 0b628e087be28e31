use crate::config::AppConfig;
use crate::data::{PgPriceSource, PriceSource};
use crate::routes::{index::index, modal::modal, range::range};
use axum::{
    routing::{get, post},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

mod config;
mod controller;
mod data;
mod error;
mod routes;
mod stats;
mod table;
mod view;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn PriceSource>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coinboard=info".into()),
        )
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // One pool for the process lifetime; requests check connections out and return them.
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(&config.database_url)
        .expect("Invalid DATABASE_URL");

    let state = AppState {
        source: Arc::new(PgPriceSource::new(pool)),
    };

    let app = Router::new()
        .route("/", get(index))
        .route("/api/range", get(range))
        .route("/api/modal", post(modal))
        .with_state(state);

    tracing::info!("Listening on {}:{}", config.host, config.port);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}
