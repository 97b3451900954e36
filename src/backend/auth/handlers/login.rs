/**
 * Login Handler
 *
 * `GET /login` renders the form, `POST /login` authenticates.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Store a session record and set the signed session cookie
 * 4. Redirect to `/home`
 *
 * Unknown email and wrong password produce the same message, and no
 * session is created.
 */

use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;
use bcrypt::verify;
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::LoginForm;
use crate::backend::auth::sessions::{session_cookie, SessionRecord, SessionStore, SESSION_COOKIE};
use crate::backend::auth::users::{get_user_by_email, User};
use crate::backend::error::BackendError;
use crate::backend::views;

/// Message shown for any failed login
pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Please try again.";

/// Render the login form
pub async fn login_page(
    State(sessions): State<SessionStore>,
    jar: SignedCookieJar,
) -> Html<String> {
    let user_authenticated = sessions.lookup(&jar).await.is_some();
    views::login_page(user_authenticated)
}

/// Check an email/password pair against the stored bcrypt hash
///
/// # Returns
/// The user when the credentials match, `None` otherwise
pub async fn authenticate(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<Option<User>, BackendError> {
    let Some(user) = get_user_by_email(pool, email).await? else {
        tracing::warn!("Login attempt for unknown email: {}", email);
        return Ok(None);
    };

    if verify(password, &user.password_hash)? {
        Ok(Some(user))
    } else {
        tracing::warn!("Invalid password for user: {}", email);
        Ok(None)
    }
}

/// Login handler
pub async fn login(
    State(pool): State<SqlitePool>,
    State(sessions): State<SessionStore>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, BackendError> {
    tracing::info!("Login request for: {}", form.email);

    let user = authenticate(&pool, &form.email, &form.password)
        .await?
        .ok_or_else(|| BackendError::rejected(INVALID_CREDENTIALS))?;

    // A browser holds one session; logging in again replaces it
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        sessions.remove(cookie.value()).await;
    }

    let session_id = sessions
        .create(SessionRecord {
            user_id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        })
        .await;

    tracing::info!("User logged in successfully: {} ({})", user.name, user.email);

    Ok((jar.add(session_cookie(session_id)), Redirect::to("/home")).into_response())
}
