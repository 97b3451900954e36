/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables and
 * opens the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * | Variable         | Default                     |
 * |------------------|-----------------------------|
 * | `DATABASE_URL`   | `sqlite:post_scheduler.db`  |
 * | `UPLOAD_DIR`     | `uploads`                   |
 * | `SESSION_SECRET` | random key per process      |
 * | `SERVER_PORT`    | `3000`                      |
 * | `BCRYPT_COST`    | `bcrypt::DEFAULT_COST`      |
 *
 * A `.env` file is honoured because the binary calls `dotenv::dotenv()`
 * before reading the environment.
 */

use std::path::PathBuf;
use std::str::FromStr;

use axum_extra::extract::cookie::Key;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::error::BackendError;

/// Photo extensions accepted by the upload helper, compared case-insensitively
pub const ALLOWED_PHOTO_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Minimum `SESSION_SECRET` length in bytes accepted by the cookie signer
pub const MIN_SESSION_SECRET_LEN: usize = 64;

/// Runtime configuration for the server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// sqlx connection URL for the SQLite database
    pub database_url: String,
    /// Directory that uploaded photos are written to
    pub upload_dir: PathBuf,
    /// Secret used to sign the session cookie
    pub session_secret: Option<String>,
    /// TCP port to listen on
    pub port: u16,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:post_scheduler.db".to_string(),
            upload_dir: PathBuf::from("uploads"),
            session_secret: None,
            port: 3000,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to defaults
    ///
    /// Unparsable numeric values are logged and replaced by their default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!("Invalid SERVER_PORT {:?}, using {}", raw, defaults.port);
                defaults.port
            }),
            Err(_) => defaults.port,
        };

        let bcrypt_cost = match std::env::var("BCRYPT_COST") {
            Ok(raw) => raw.parse::<u32>().unwrap_or_else(|_| {
                tracing::warn!("Invalid BCRYPT_COST {:?}, using {}", raw, defaults.bcrypt_cost);
                defaults.bcrypt_cost
            }),
            Err(_) => defaults.bcrypt_cost,
        };

        Self {
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            session_secret: std::env::var("SESSION_SECRET")
                .ok()
                .filter(|secret| !secret.is_empty()),
            port,
            bcrypt_cost,
        }
    }

    /// Build the cookie signing key
    ///
    /// Without `SESSION_SECRET` a random key is generated, so sessions do not
    /// survive a restart. A secret shorter than [`MIN_SESSION_SECRET_LEN`]
    /// bytes is a configuration error.
    pub fn cookie_key(&self) -> Result<Key, BackendError> {
        match &self.session_secret {
            Some(secret) => {
                if secret.len() < MIN_SESSION_SECRET_LEN {
                    return Err(BackendError::config(format!(
                        "SESSION_SECRET must be at least {} bytes, got {}",
                        MIN_SESSION_SECRET_LEN,
                        secret.len()
                    )));
                }
                Key::try_from(secret.as_bytes())
                    .map_err(|e| BackendError::config(format!("Invalid SESSION_SECRET: {}", e)))
            }
            None => {
                tracing::warn!(
                    "SESSION_SECRET not set. Using a random signing key; sessions end on restart."
                );
                Ok(Key::generate())
            }
        }
    }
}

/// Open the SQLite pool and apply migrations
///
/// The database file is created when missing and foreign keys are enforced,
/// so a post can only reference an existing user.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, BackendError> {
    tracing::info!("Connecting to database at {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
