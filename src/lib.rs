//! Post Scheduler - Main Library
//!
//! A small web application where users register, log in and record
//! social-media posts with a future publish time and an optional photo.
//! Recording a post only stores it; nothing is ever sent to the external
//! platform.
//!
//! # Module Structure
//!
//! - **`backend`** - Axum server, SQLite persistence, sessions, handlers, views
//!
//! # Usage
//!
//! ```rust,no_run
//! use post_scheduler::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env();
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. Refused form submissions come
//! back as plain-text messages; internal failures are logged and answered
//! with a generic 500.

/// Backend server-side code
pub mod backend;
