/// Application state and router builder
///
/// This module defines the shared application state and provides a function
/// to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskmanager_api::{app::AppState, config::Config};
/// use taskmanager_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(DatabaseConfig {
///     url: config.database.url.clone(),
///     max_connections: config.database.max_connections,
///     ..Default::default()
/// })
/// .await?;
/// let state = AppState::new(pool, config);
/// let app = taskmanager_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                      # Health check
/// ├── /user/                       # User resource
/// │   ├── GET    /                 # List users
/// │   ├── GET    /user_id          # Get user by ?user_id=
/// │   ├── GET    /user_id/tasks    # Tasks owned by ?user_id=
/// │   ├── POST   /create           # Create user
/// │   ├── PUT    /update           # Update user by ?user_id=
/// │   └── DELETE /delete           # Delete user (and tasks) by ?user_id=
/// └── /task/                       # Task resource
///     ├── GET    /                 # List tasks
///     ├── GET    /task_id          # Get task by ?task_id=
///     ├── POST   /create           # Create task for ?user_id=
///     ├── PUT    /update           # Update task by ?task_id=
///     └── DELETE /delete           # Delete task by ?task_id=
/// ```
///
/// Request logging is provided by tower-http's TraceLayer.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    let user_routes = Router::new()
        .route("/", get(routes::user::all_users))
        .route("/user_id", get(routes::user::user_by_id))
        .route("/user_id/tasks", get(routes::user::tasks_by_user_id))
        .route("/create", post(routes::user::create_user))
        .route("/update", put(routes::user::update_user))
        .route("/delete", delete(routes::user::delete_user));

    let task_routes = Router::new()
        .route("/", get(routes::task::all_tasks))
        .route("/task_id", get(routes::task::task_by_id))
        .route("/create", post(routes::task::create_task))
        .route("/update", put(routes::task::update_task))
        .route("/delete", delete(routes::task::delete_task));

    Router::new()
        .merge(health_routes)
        .nest("/user", user_routes)
        .nest("/task", task_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
