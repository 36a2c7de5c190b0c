/// Task resource endpoints
///
/// CRUD endpoints for tasks. Identifiers arrive as query parameters, bodies
/// as JSON; mutating endpoints answer with an acknowledgment object rather
/// than the mutated row.
///
/// # Endpoints
///
/// - `GET    /task/` - List all tasks
/// - `GET    /task/task_id?task_id=<int>` - Get one task
/// - `POST   /task/create?user_id=<int>` - Create a task for a user
/// - `PUT    /task/update?task_id=<int>` - Update a task
/// - `DELETE /task/delete?task_id=<int>` - Delete a task

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
    task::{CreateTask, Task, UpdateTask},
    user::User,
};

/// Query parameter selecting a task
#[derive(Debug, Deserialize)]
pub struct TaskIdQuery {
    pub task_id: i64,
}

/// Query parameter selecting the owning user
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: i64,
}

/// Lists all tasks
///
/// An empty store yields an empty list, never an error.
pub async fn all_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list(&state.db).await?;
    Ok(Json(tasks))
}

/// Gets a single task by id
///
/// # Errors
///
/// - `404 Not Found`: no task with the given id
pub async fn task_by_id(
    State(state): State<AppState>,
    Query(query): Query<TaskIdQuery>,
) -> ApiResult<Json<Task>> {
    let task = Task::find_by_id(&state.db, query.task_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("There is no task found".to_string()))?;

    Ok(Json(task))
}

/// Creates a task owned by the user named in the query
///
/// The owning user must exist; the task slug is derived from the title at
/// this point and never recomputed.
///
/// # Errors
///
/// - `404 Not Found`: no user with the given id
pub async fn create_task(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
    Json(req): Json<CreateTask>,
) -> ApiResult<(StatusCode, Json<Ack>)> {
    if User::find_by_id(&state.db, query.user_id).await?.is_none() {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    Task::create(&state.db, query.user_id, req).await?;

    Ok((StatusCode::CREATED, Json(Ack::created())))
}

/// Overwrites title, content and priority of an existing task
///
/// The slug keeps its creation-time value.
///
/// # Errors
///
/// - `404 Not Found`: no task with the given id
pub async fn update_task(
    State(state): State<AppState>,
    Query(query): Query<TaskIdQuery>,
    Json(req): Json<UpdateTask>,
) -> ApiResult<(StatusCode, Json<Ack>)> {
    let updated = Task::update(&state.db, query.task_id, req).await?;

    if !updated {
        return Err(ApiError::NotFound("There is no task found".to_string()));
    }

    Ok((StatusCode::OK, Json(Ack::ok("Task update is successful"))))
}

/// Deletes a task by id
///
/// # Errors
///
/// - `404 Not Found`: no task with the given id
pub async fn delete_task(
    State(state): State<AppState>,
    Query(query): Query<TaskIdQuery>,
) -> ApiResult<(StatusCode, Json<Ack>)> {
    let deleted = Task::delete(&state.db, query.task_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("There is no task found".to_string()));
    }

    Ok((StatusCode::OK, Json(Ack::ok("Task delete is successful"))))
}
