//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - session gate for routes that require a logged-in user
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use post_scheduler::backend::middleware::require_session;
//!
//! let protected = Router::new()
//!     .route("/register_post", get(register_post_page))
//!     .route_layer(from_fn_with_state(state.clone(), require_session));
//! ```

pub mod auth;

pub use auth::{require_session, CurrentSession, LOGIN_PATH};
