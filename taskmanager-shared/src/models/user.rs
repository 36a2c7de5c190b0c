/// User model and database operations
///
/// Users own zero or more tasks via `tasks.user_id`. The slug is derived
/// from the username once at creation time and is immutable afterwards, as
/// is the username itself.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     username TEXT NOT NULL,
///     firstname TEXT NOT NULL,
///     lastname TEXT NOT NULL,
///     age INTEGER NOT NULL,
///     slug TEXT NOT NULL
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::debug;

use crate::slug::slugify;

/// User model representing one row of the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned by the storage engine
    pub id: i64,

    /// Username, immutable after creation
    pub username: String,

    /// First name
    pub firstname: String,

    /// Last name
    pub lastname: String,

    /// Age in years
    pub age: i64,

    /// URL-safe slug derived from the username at creation time
    pub slug: String,
}

/// Input for creating a new user
///
/// The slug is not part of the input; it is derived from `username`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i64,
}

/// Input for updating an existing user
///
/// Only the three mutable fields appear here: `username` and `slug` are
/// fixed for the lifetime of the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    pub firstname: String,
    pub lastname: String,
    pub age: i64,
}

impl User {
    /// Creates a new user in the database
    ///
    /// The slug is computed from the username before insert and stored with
    /// the row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let slug = slugify(&data.username);

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, firstname, lastname, age, slug)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, firstname, lastname, age, slug
            "#,
        )
        .bind(data.username)
        .bind(data.firstname)
        .bind(data.lastname)
        .bind(data.age)
        .bind(slug)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID
    ///
    /// Returns the user if found, None otherwise.
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, lastname, age, slug
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Lists all users in storage-engine-default order
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, lastname, age, slug
            FROM users
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Overwrites the mutable fields of an existing user
    ///
    /// The slug stays untouched.
    ///
    /// # Returns
    ///
    /// True if the user existed and was updated, false otherwise.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateUser,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET firstname = $2, lastname = $3, age = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(data.firstname)
        .bind(data.lastname)
        .bind(data.age)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a user together with all tasks it owns
    ///
    /// Runs as a single transaction: owned tasks are removed first (foreign
    /// keys are enforced), then the user row, then everything commits
    /// atomically. A user without tasks is deleted normally; the empty task
    /// set is only logged.
    ///
    /// # Returns
    ///
    /// True if the user existed and was deleted, false otherwise.
    pub async fn delete_with_tasks(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if exists.is_none() {
            return Ok(false);
        }

        let tasks_removed = sqlx::query("DELETE FROM tasks WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if tasks_removed == 0 {
            debug!(user_id = id, "User owned no tasks");
        }

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(user_id = id, tasks_removed, "Deleted user and owned tasks");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_struct() {
        let create_user = CreateUser {
            username: "john_doe".to_string(),
            firstname: "John".to_string(),
            lastname: "Doe".to_string(),
            age: 30,
        };

        assert_eq!(create_user.username, "john_doe");
        assert_eq!(create_user.age, 30);
    }

    // Database operations are covered in tests/model_tests.rs
}
