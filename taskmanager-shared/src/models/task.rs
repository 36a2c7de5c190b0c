/// Task model and database operations
///
/// Every task belongs to exactly one user. The owning `user_id` is set at
/// creation time, after the caller has verified the user exists, and never
/// changes. The slug is derived from the title once at creation.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     user_id INTEGER NOT NULL REFERENCES users(id),
///     title TEXT NOT NULL,
///     content TEXT NOT NULL,
///     priority INTEGER NOT NULL,
///     slug TEXT NOT NULL
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::slug::slugify;

/// Task model representing one row of the `tasks` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID, assigned by the storage engine
    pub id: i64,

    /// ID of the owning user, set only at creation
    pub user_id: i64,

    /// Task title
    pub title: String,

    /// Task body text
    pub content: String,

    /// Priority value
    pub priority: i64,

    /// URL-safe slug derived from the title at creation time
    pub slug: String,
}

/// Input for creating a new task
///
/// The owning user is passed separately as a query parameter; the slug is
/// derived from `title`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub content: String,
    pub priority: i64,
}

/// Input for updating an existing task
///
/// Overwrites title, content and priority in place. The slug keeps its
/// creation-time value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTask {
    pub title: String,
    pub content: String,
    pub priority: i64,
}

impl Task {
    /// Creates a new task owned by `user_id`
    ///
    /// Callers must verify the user exists first; this function does not
    /// re-check.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create(
        pool: &SqlitePool,
        user_id: i64,
        data: CreateTask,
    ) -> Result<Self, sqlx::Error> {
        let slug = slugify(&data.title);

        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (user_id, title, content, priority, slug)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, title, content, priority, slug
            "#,
        )
        .bind(user_id)
        .bind(data.title)
        .bind(data.content)
        .bind(data.priority)
        .bind(slug)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID
    ///
    /// Returns the task if found, None otherwise.
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, title, content, priority, slug
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists all tasks in storage-engine-default order
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, title, content, priority, slug
            FROM tasks
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Lists all tasks owned by one user
    ///
    /// An empty vector is a valid result for a task-less user.
    pub async fn list_by_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, title, content, priority, slug
            FROM tasks
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Overwrites the mutable fields of an existing task
    ///
    /// The slug stays untouched.
    ///
    /// # Returns
    ///
    /// True if the task existed and was updated, false otherwise.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateTask,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = $2, content = $3, priority = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(data.title)
        .bind(data.content)
        .bind(data.priority)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a task by ID
    ///
    /// # Returns
    ///
    /// True if the task existed and was deleted, false otherwise.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_struct() {
        let create_task = CreateTask {
            title: "Write the report".to_string(),
            content: "Quarterly numbers".to_string(),
            priority: 1,
        };

        assert_eq!(create_task.title, "Write the report");
        assert_eq!(create_task.priority, 1);
    }

    // Database operations are covered in tests/model_tests.rs
}
