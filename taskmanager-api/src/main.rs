//! # Task Manager API Server
//!
//! HTTP/JSON CRUD API for users and their tasks, backed by SQLite.
//!
//! ## Architecture
//!
//! The server is built with Axum and provides:
//! - User endpoints (list, get, tasks-of-user, create, update, delete)
//! - Task endpoints (list, get, create, update, delete)
//! - A health check endpoint
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p taskmanager-api
//! ```

use taskmanager_api::{
    app::{build_router, AppState},
    config::Config,
};
use taskmanager_shared::db::{
    migrations::run_migrations,
    pool::{create_pool, DatabaseConfig},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskmanager_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Task Manager API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;
    let bind_address = config.bind_address();

    let pool = create_pool(DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;

    run_migrations(&pool).await?;

    let state = AppState::new(pool, config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
