/**
 * Post Scheduling Handler
 *
 * `GET /register_post` renders the scheduling form and `POST /register_post`
 * stores a post. Both require a session.
 *
 * # Validation Order
 *
 * 1. the target user exists
 * 2. the target user has an access token
 * 3. `post_time` matches `YYYY-MM-DDTHH:MM`
 * 4. an attached photo has a jpg/jpeg/png extension
 *
 * Only after every check passes is the photo written and the row inserted;
 * a photo whose row cannot be inserted is deleted again.
 * No request is ever made to the external platform; the token is read to
 * gate scheduling and nothing else.
 */

use axum::{
    extract::{Multipart, State},
    response::{Html, Redirect},
};
use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use std::path::Path;

use crate::backend::auth::users::{get_user_by_id, User};
use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentSession;
use crate::backend::posts::db::{create_post, NewPost, Post};
use crate::backend::posts::upload::{allowed_file, save_photo, UploadedFile};
use crate::backend::server::state::AppState;
use crate::backend::views::{self, pages::POST_TIME_FORMAT};

pub const USER_NOT_FOUND: &str = "User not found.";
pub const TOKEN_NOT_FOUND: &str = "Access token not found.";
pub const INVALID_POST_TIME: &str = "Invalid post time.";
pub const FILE_NOT_ALLOWED: &str = "File type not allowed.";

/// Fields of the multipart scheduling form
#[derive(Debug, Default)]
pub struct PostSubmission {
    pub user_id: String,
    pub post: String,
    pub post_time: String,
    pub photo: Option<UploadedFile>,
}

impl PostSubmission {
    /// Collect the form fields; unknown fields are ignored
    ///
    /// A file input left empty arrives as a part with an empty file name
    /// and is treated as no photo.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, BackendError> {
        let mut submission = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "user_id" => submission.user_id = field.text().await?,
                "post" => submission.post = field.text().await?,
                "post_time" => submission.post_time = field.text().await?,
                "photo" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    if !file_name.is_empty() {
                        submission.photo = Some(UploadedFile {
                            file_name,
                            bytes: bytes.to_vec(),
                        });
                    }
                }
                other => tracing::debug!("Ignoring unexpected form field {:?}", other),
            }
        }

        Ok(submission)
    }
}

/// Parse the `datetime-local` value of the form
pub fn parse_post_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), POST_TIME_FORMAT).ok()
}

/// Render the scheduling form
pub async fn register_post_page(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Html<String>, BackendError> {
    let user = get_user_by_id(&state.db_pool, session.user_id).await?;
    Ok(views::register_post_page(user.as_ref()))
}

/// Validate a submission against the target user
///
/// # Returns
/// The target user together with the parsed publish time
pub fn validate_submission<'a>(
    user: Option<&'a User>,
    submission: &PostSubmission,
) -> Result<(&'a User, NaiveDateTime), BackendError> {
    let user = user.ok_or_else(|| BackendError::rejected(USER_NOT_FOUND))?;

    if user.access_token.is_none() {
        return Err(BackendError::rejected(TOKEN_NOT_FOUND));
    }

    let post_time = parse_post_time(&submission.post_time)
        .ok_or_else(|| BackendError::rejected(INVALID_POST_TIME))?;

    if let Some(photo) = &submission.photo {
        if !allowed_file(&photo.file_name) {
            return Err(BackendError::rejected(FILE_NOT_ALLOWED));
        }
    }

    Ok((user, post_time))
}

/// Write the photo (if any) and insert the post row
///
/// When the insert fails the photo written for it is removed again.
pub async fn store_post(
    pool: &SqlitePool,
    upload_dir: &Path,
    user_id: i64,
    submission: PostSubmission,
    post_time: NaiveDateTime,
) -> Result<Post, BackendError> {
    let saved = match &submission.photo {
        Some(photo) => Some(save_photo(upload_dir, photo).await?),
        None => None,
    };

    let new_post = NewPost {
        user_id,
        content: submission.post,
        post_time,
        photo_path: saved.as_ref().map(|path| path.to_string_lossy().into_owned()),
    };

    match create_post(pool, new_post).await {
        Ok(post) => Ok(post),
        Err(err) => {
            if let Some(path) = &saved {
                if let Err(remove_err) = tokio::fs::remove_file(path).await {
                    tracing::warn!("Failed to remove photo {}: {}", path.display(), remove_err);
                }
            }
            Err(err.into())
        }
    }
}

/// Store a scheduled post
pub async fn register_post(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    multipart: Multipart,
) -> Result<Redirect, BackendError> {
    let submission = PostSubmission::from_multipart(multipart).await?;

    let target = match submission.user_id.trim().parse::<i64>() {
        Ok(id) => get_user_by_id(&state.db_pool, id).await?,
        Err(_) => None,
    };
    let (user, post_time) = validate_submission(target.as_ref(), &submission)?;
    let user_id = user.id;

    let post = store_post(&state.db_pool, &state.uploads.dir, user_id, submission, post_time).await?;

    tracing::info!(
        "Post {} scheduled for user {} by {}",
        post.id,
        user_id,
        session.email
    );
    tracing::info!("Scheduled time: {}", post.post_time.format(POST_TIME_FORMAT));
    if let Some(path) = &post.photo_path {
        tracing::info!("Attached photo: {}", path);
    }

    Ok(Redirect::to("/home?success=true"))
}
