/// User resource endpoints
///
/// CRUD endpoints for users plus the derived tasks-of-user query.
/// Identifiers arrive as query parameters, bodies as JSON; mutating
/// endpoints answer with an acknowledgment object.
///
/// # Endpoints
///
/// - `GET    /user/` - List all users
/// - `GET    /user/user_id?user_id=<int>` - Get one user
/// - `GET    /user/user_id/tasks?user_id=<int>` - Tasks owned by a user
/// - `POST   /user/create` - Create a user
/// - `PUT    /user/update?user_id=<int>` - Update a user
/// - `DELETE /user/delete?user_id=<int>` - Delete a user and its tasks

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::Ack,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use taskmanager_shared::models::{
    task::Task,
    user::{CreateUser, UpdateUser, User},
};

/// Query parameter selecting a user
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: i64,
}

/// Lists all users
///
/// An empty store yields an empty list, never an error.
pub async fn all_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list(&state.db).await?;
    Ok(Json(users))
}

/// Gets a single user by id
///
/// # Errors
///
/// - `404 Not Found`: no user with the given id
pub async fn user_by_id(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Json<User>> {
    let user = User::find_by_id(&state.db, query.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("There is no user found".to_string()))?;

    Ok(Json(user))
}

/// Lists the tasks owned by one user
///
/// A task-less user yields an empty list; only a missing user is an error.
///
/// # Errors
///
/// - `404 Not Found`: no user with the given id
pub async fn tasks_by_user_id(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Json<Vec<Task>>> {
    if User::find_by_id(&state.db, query.user_id).await?.is_none() {
        return Err(ApiError::NotFound("There is no user found".to_string()));
    }

    let tasks = Task::list_by_user(&state.db, query.user_id).await?;
    Ok(Json(tasks))
}

/// Creates a new user
///
/// The slug is derived from the username at this point and never
/// recomputed.
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUser>,
) -> ApiResult<(StatusCode, Json<Ack>)> {
    User::create(&state.db, req).await?;

    Ok((StatusCode::CREATED, Json(Ack::created())))
}

/// Overwrites firstname, lastname and age of an existing user
///
/// Username and slug are immutable post-creation.
///
/// # Errors
///
/// - `404 Not Found`: no user with the given id
pub async fn update_user(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
    Json(req): Json<UpdateUser>,
) -> ApiResult<(StatusCode, Json<Ack>)> {
    let updated = User::update(&state.db, query.user_id, req).await?;

    if !updated {
        return Err(ApiError::NotFound("There is no user found".to_string()));
    }

    Ok((StatusCode::OK, Json(Ack::ok("User update is successful"))))
}

/// Deletes a user together with all tasks it owns
///
/// User row and task rows go in one transaction; a task-less user is
/// deleted normally.
///
/// # Errors
///
/// - `404 Not Found`: no user with the given id
pub async fn delete_user(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<(StatusCode, Json<Ack>)> {
    let deleted = User::delete_with_tasks(&state.db, query.user_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("There is no user found".to_string()));
    }

    Ok((StatusCode::OK, Json(Ack::ok("User delete is successful"))))
}
