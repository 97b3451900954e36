/**
 * Session Middleware
 *
 * Protects routes that require a logged-in user. The middleware resolves
 * the signed session cookie against the session store; without a session
 * the browser is redirected to `/login`, otherwise the [`SessionRecord`]
 * is attached to the request extensions for handlers to pick up through
 * the [`CurrentSession`] extractor.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::backend::auth::sessions::{SessionRecord, SessionStore};

/// Where unauthenticated visitors are sent
pub const LOGIN_PATH: &str = "/login";

/// Session-gate middleware
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn require_session(
    State(sessions): State<SessionStore>,
    jar: SignedCookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    match sessions.lookup(&jar).await {
        Some(record) => {
            request.extensions_mut().insert(record);
            next.run(request).await
        }
        None => {
            tracing::debug!("No session for {}, redirecting to login", request.uri().path());
            Redirect::to(LOGIN_PATH).into_response()
        }
    }
}

/// Axum extractor for the session attached by [`require_session`]
///
/// Rejects with a redirect to the login page when no session was attached.
#[derive(Clone, Debug)]
pub struct CurrentSession(pub SessionRecord);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionRecord>()
            .cloned()
            .map(CurrentSession)
            .ok_or_else(|| {
                tracing::warn!("SessionRecord not found in request extensions");
                Redirect::to(LOGIN_PATH)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::LOCATION, StatusCode};

    fn record() -> SessionRecord {
        SessionRecord {
            user_id: 5,
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_extract_current_session() {
        let mut request = Request::builder().uri("/register_post").body(()).unwrap();
        request.extensions_mut().insert(record());
        let (mut parts, _) = request.into_parts();

        let CurrentSession(session) = CurrentSession::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(session, record());
    }

    #[tokio::test]
    async fn test_extract_current_session_missing() {
        let request = Request::builder().uri("/register_post").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let rejection = CurrentSession::from_request_parts(&mut parts, &())
            .await
            .unwrap_err()
            .into_response();
        assert_eq!(rejection.status(), StatusCode::SEE_OTHER);
        assert_eq!(rejection.headers()[LOCATION], LOGIN_PATH);
    }
}
