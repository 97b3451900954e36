//! Database operations for scheduled posts
//!
//! A post is either scheduled (its row exists) or deleted (row removed).
//! There is no update path, so the owner of a post never changes.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Row of the `posts` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Text of the post
    pub content: String,
    /// Requested publish time (minute precision, no timezone)
    pub post_time: NaiveDateTime,
    /// Where the attached photo was stored, if any
    pub photo_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields required to insert a post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: i64,
    pub content: String,
    pub post_time: NaiveDateTime,
    pub photo_path: Option<String>,
}

/// Insert a post; fails on a foreign key violation if the user does not exist
pub async fn create_post(pool: &SqlitePool, post: NewPost) -> Result<Post, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (user_id, content, post_time, photo_path, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, content, post_time, photo_path, created_at
        "#,
    )
    .bind(post.user_id)
    .bind(&post.content)
    .bind(post.post_time)
    .bind(&post.photo_path)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_post_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, content, post_time, photo_path, created_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// All posts owned by a user, in insertion order
pub async fn get_posts_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, content, post_time, photo_path, created_at
        FROM posts
        WHERE user_id = $1
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Delete a post by ID
///
/// # Returns
/// `true` if a row was removed
pub async fn delete_post(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
