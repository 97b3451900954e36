/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - the SQLite connection pool
 * - the in-memory session store
 * - the cookie signing key
 * - the directory uploads are written to
 *
 * Every field is cheap to clone (`Arc`-backed), so handlers can extract
 * just the part they need, e.g. `State(pool): State<SqlitePool>`.
 */

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,
    /// Logged-in sessions
    pub sessions: SessionStore,
    /// Key used to sign the session cookie
    pub cookie_key: Key,
    /// Upload settings
    pub uploads: UploadSettings,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

/// Where and how photos are stored
#[derive(Clone, Debug)]
pub struct UploadSettings {
    pub dir: Arc<PathBuf>,
}

impl UploadSettings {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Arc::new(dir.into()),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.db_pool.clone()
    }
}

impl FromRef<AppState> for SessionStore {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

/// Required by `SignedCookieJar`
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

impl FromRef<AppState> for UploadSettings {
    fn from_ref(state: &AppState) -> Self {
        state.uploads.clone()
    }
}
