/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 * Users are created by registration and never updated or deleted.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User struct representing a row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Account identifier on the external platform
    pub platform_account_id: String,
    /// Access token for the external platform; stored, never used
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields required to insert a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub platform_account_id: String,
    pub access_token: Option<String>,
}

/// Create a new user
///
/// There is no duplicate check: a repeated email violates the UNIQUE
/// constraint and surfaces as a `sqlx::Error::Database`.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `user` - Fields of the new user
///
/// # Returns
/// Created user or error
pub async fn create_user(pool: &SqlitePool, user: NewUser) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, password_hash, platform_account_id, access_token, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, email, password_hash, platform_account_id, access_token, created_at
        "#,
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.platform_account_id)
    .bind(&user.access_token)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, platform_account_id, access_token, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, platform_account_id, access_token, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    /// Single-connection in-memory database with the schema applied
    pub(crate) async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!().run(&pool).await.unwrap();
        pool
    }

    pub(crate) fn new_user(email: &str, token: Option<&str>) -> NewUser {
        NewUser {
            name: "Alice".to_string(),
            email: email.to_string(),
            password_hash: "not-a-real-hash".to_string(),
            platform_account_id: "alice_ig".to_string(),
            access_token: token.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_and_fetch_user() {
        let pool = memory_pool().await;
        let user = create_user(&pool, new_user("a@x.com", Some("tok"))).await.unwrap();
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.access_token.as_deref(), Some("tok"));

        let by_email = get_user_by_email(&pool, "a@x.com").await.unwrap();
        assert_eq!(by_email, Some(user.clone()));

        let by_id = get_user_by_id(&pool, user.id).await.unwrap();
        assert_eq!(by_id, Some(user));
    }

    #[tokio::test]
    async fn test_duplicate_email_violates_unique_constraint() {
        let pool = memory_pool().await;
        create_user(&pool, new_user("a@x.com", None)).await.unwrap();

        let err = create_user(&pool, new_user("a@x.com", None)).await.unwrap_err();
        match err {
            sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
            other => panic!("Expected unique violation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_user() {
        let pool = memory_pool().await;
        assert!(get_user_by_id(&pool, 42).await.unwrap().is_none());
        assert!(get_user_by_email(&pool, "nobody@x.com").await.unwrap().is_none());
    }
}
