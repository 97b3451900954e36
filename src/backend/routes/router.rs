/**
 * Router Configuration
 *
 * Assembles every route into a single Axum router.
 *
 * # Route Groups
 *
 * 1. Public pages: home, login, logout, register
 * 2. Session-gated pages: register_post, delete_post
 * 3. Stored photos under `/uploads`
 * 4. Fallback handler (404)
 */

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::backend::auth::handlers::{login, login_page, logout, register, register_page};
use crate::backend::middleware::require_session;
use crate::backend::posts::handlers::{delete_post, home, register_post, register_post_page};
use crate::backend::server::state::AppState;

/// Largest accepted request body, photo included
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Create the Axum router with all routes configured
///
/// ## Public
///
/// - `GET|POST /`, `/home` - post listing (redirects to login without a session)
/// - `GET|POST /login` - login form / authentication
/// - `GET /logout` - end the session
/// - `GET|POST /register` - registration form / user creation
///
/// ## Session required
///
/// - `GET|POST /register_post` - scheduling form / post creation
/// - `POST /delete_post/{id}` - owner-only deletion
///
/// ## Static
///
/// - `GET /uploads/*` - stored photos
pub fn create_router(app_state: AppState) -> Router<()> {
    let protected = Router::new()
        .route("/register_post", get(register_post_page).post(register_post))
        .route("/delete_post/{post_id}", post(delete_post))
        .route_layer(from_fn_with_state(app_state.clone(), require_session));

    let upload_dir = (*app_state.uploads.dir).clone();

    Router::new()
        .route("/", get(home).post(home))
        .route("/home", get(home).post(home))
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout))
        .route("/register", get(register_page).post(register))
        .merge(protected)
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(app_state)
}
