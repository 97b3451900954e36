/**
 * Home Handler
 *
 * `GET|POST /` and `/home` list the logged-in user's scheduled posts.
 * Visitors without a session, or whose user row no longer exists, are
 * redirected to the login page.
 */

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;
use serde::Deserialize;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::LOGIN_PATH;
use crate::backend::posts::db::get_posts_for_user;
use crate::backend::server::state::AppState;
use crate::backend::views;

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    /// Set after a post was scheduled
    #[serde(default)]
    pub success: Option<String>,
}

impl HomeQuery {
    fn success(&self) -> bool {
        self.success
            .as_deref()
            .is_some_and(|flag| flag.eq_ignore_ascii_case("true") || flag == "1")
    }
}

pub async fn home(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Query(query): Query<HomeQuery>,
) -> Result<Response, BackendError> {
    let Some(session) = state.sessions.lookup(&jar).await else {
        return Ok(Redirect::to(LOGIN_PATH).into_response());
    };

    let Some(user) = get_user_by_id(&state.db_pool, session.user_id).await? else {
        tracing::warn!("Session refers to missing user {}", session.user_id);
        return Ok(Redirect::to(LOGIN_PATH).into_response());
    };

    let posts = get_posts_for_user(&state.db_pool, user.id).await?;
    tracing::debug!("Listing {} posts for user {}", posts.len(), user.id);

    Ok(views::home_page(&user, &posts, query.success()).into_response())
}
