/// Database models
///
/// This module contains the two record types and their CRUD operations.
///
/// # Models
///
/// - `user`: User accounts that own tasks
/// - `task`: Tasks belonging to a user
///
/// # Example
///
/// ```no_run
/// use taskmanager_shared::models::user::{CreateUser, User};
/// use taskmanager_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(
///     &pool,
///     CreateUser {
///         username: "john_doe".to_string(),
///         firstname: "John".to_string(),
///         lastname: "Doe".to_string(),
///         age: 30,
///     },
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```

pub mod task;
pub mod user;
