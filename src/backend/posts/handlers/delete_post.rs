/**
 * Post Deletion Handler
 *
 * `POST /delete_post/{id}` removes a post owned by the logged-in user.
 * Ownership is checked against the session's user ID. The photo file, if
 * any, is left on disk.
 */

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentSession;
use crate::backend::posts::db;

pub const POST_NOT_FOUND: &str = "Post not found.";
pub const UNAUTHORIZED: &str = "Unauthorized access.";

pub async fn delete_post(
    State(pool): State<SqlitePool>,
    CurrentSession(session): CurrentSession,
    Path(post_id): Path<i64>,
) -> Result<Redirect, BackendError> {
    let post = db::get_post_by_id(&pool, post_id)
        .await?
        .ok_or_else(|| BackendError::rejected(POST_NOT_FOUND))?;

    if post.user_id != session.user_id {
        tracing::warn!(
            "User {} tried to delete post {} owned by {}",
            session.user_id,
            post.id,
            post.user_id
        );
        return Err(BackendError::rejected(UNAUTHORIZED));
    }

    if !db::delete_post(&pool, post.id).await? {
        // Removed by a concurrent request between the lookup and the delete
        return Err(BackendError::rejected(POST_NOT_FOUND));
    }

    tracing::info!("Post {} deleted by user {}", post.id, session.user_id);
    Ok(Redirect::to("/home"))
}
