//! Backend Module
//!
//! All server-side code: an Axum HTTP server that lets users register, log
//! in, and record posts with a future publish time and an optional photo.
//!
//! # Architecture
//!
//! - **`server`** - configuration, application state, initialization
//! - **`routes`** - router assembly
//! - **`auth`** - users, sessions, login/logout/register handlers
//! - **`posts`** - scheduled posts, photo uploads, post handlers
//! - **`middleware`** - session gate for protected routes
//! - **`views`** - server-rendered HTML pages
//! - **`error`** - backend error type and its HTTP conversion
//!
//! # Request Flow
//!
//! browser form → handler validates input and looks up the session →
//! handler reads or writes SQLite → handler renders HTML or redirects.
//! There is no queue and no background worker: a scheduled post is a row
//! with a timestamp and nothing else.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Scheduled posts and photo uploads
pub mod posts;

/// Middleware for request processing
pub mod middleware;

/// HTML pages
pub mod views;

pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
