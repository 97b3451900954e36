/**
 * Logout Handler
 *
 * `GET /logout` forgets the session and clears the cookie. Visitors without
 * a session are simply redirected.
 */

use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::backend::auth::sessions::{removal_cookie, SessionStore, SESSION_COOKIE};
use crate::backend::middleware::LOGIN_PATH;

pub async fn logout(
    State(sessions): State<SessionStore>,
    jar: SignedCookieJar,
) -> impl IntoResponse {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Some(record) = sessions.remove(cookie.value()).await {
            tracing::info!("User logged out: {}", record.email);
        }
    }

    (jar.remove(removal_cookie()), Redirect::to(LOGIN_PATH))
}
