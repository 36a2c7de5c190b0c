/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - An in-memory SQLite database with the schema applied
/// - The fully built application router
/// - Helpers for issuing requests and seeding rows

use axum::body::Body;
use axum::http::{Request, Response};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use taskmanager_api::app::{build_router, AppState};
use taskmanager_api::config::{ApiConfig, Config, DatabaseConfig};
use taskmanager_shared::db::migrations::run_migrations;
use taskmanager_shared::models::task::{CreateTask, Task};
use taskmanager_shared::models::user::{CreateUser, User};
use tower::ServiceExt;

/// Test context containing the database pool and the router under test
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context with a fresh in-memory database
    ///
    /// The pool is capped at one connection so the in-memory database
    /// survives for the lifetime of the test.
    pub async fn new() -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        run_migrations(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
        };

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app })
    }

    /// Sends a request through the router and returns the raw response
    pub async fn request(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }
}

/// Builds a request with a JSON body
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a body-less request
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Reads a response body as JSON
pub async fn response_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Seeds a user directly through the data layer and returns its id
pub async fn seed_user(ctx: &TestContext, username: &str) -> anyhow::Result<i64> {
    let user = User::create(
        &ctx.db,
        CreateUser {
            username: username.to_string(),
            firstname: "Test".to_string(),
            lastname: "User".to_string(),
            age: 30,
        },
    )
    .await?;

    Ok(user.id)
}

/// Seeds a task directly through the data layer and returns its id
pub async fn seed_task(ctx: &TestContext, user_id: i64, title: &str) -> anyhow::Result<i64> {
    let task = Task::create(
        &ctx.db,
        user_id,
        CreateTask {
            title: title.to_string(),
            content: "seeded content".to_string(),
            priority: 1,
        },
    )
    .await?;

    Ok(task.id)
}
