/**
 * Server Initialization
 *
 * Builds the application state from a [`ServerConfig`] and assembles the
 * router.
 *
 * # Initialization Steps
 *
 * 1. Open the database and apply migrations
 * 2. Make sure the upload directory exists
 * 3. Build the cookie signing key
 * 4. Create the session store and the router
 */

use axum::Router;

use crate::backend::auth::sessions::SessionStore;
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::{AppState, UploadSettings};

/// Build the shared state described by `config`
pub async fn build_state(config: &ServerConfig) -> Result<AppState, BackendError> {
    let db_pool = load_database(&config.database_url).await?;

    tokio::fs::create_dir_all(&config.upload_dir).await?;
    tracing::info!("Uploads are stored in {}", config.upload_dir.display());

    Ok(AppState {
        db_pool,
        sessions: SessionStore::new(),
        cookie_key: config.cookie_key()?,
        uploads: UploadSettings::new(config.upload_dir.clone()),
        bcrypt_cost: config.bcrypt_cost,
    })
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing post scheduler server");

    let state = build_state(config).await?;
    let app = create_router(state);

    tracing::info!("Router configured");
    Ok(app)
}
