//! Ladle API - food-ordering catalog server.
//!
//! # Architecture
//!
//! - Axum web framework serving a JSON API for a browser client
//! - `SQLite` for catalog and credential storage (embedded, per-record
//!   atomic operations only)
//! - Uploaded images are normalized server-side into embeddable data URLs
//!
//! The shopper's cart never reaches this server; it lives in the client
//! (see the `ladle-cart` crate).

#![cfg_attr(not(test), forbid(unsafe_code))]

use ladle_api::config::ApiConfig;
use ladle_api::state::AppState;
use ladle_api::{db, routes};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter; defaults to info level for our
    // crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ladle_api=info,tower_http=debug".into());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load configuration from environment
    let config = ApiConfig::from_env().expect("Failed to load configuration");

    // Initialize database connection pool and schema
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    tracing::info!("Database ready");

    let addr = config.socket_addr();
    let state = AppState::new(pool);
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("Server running on {addr}");

    axum::serve(listener, app).await.expect("Server error");
}
