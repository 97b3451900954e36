/**
 * Session Management
 *
 * Sessions are held server-side in a shared map from an opaque session ID
 * to a [`SessionRecord`]. The browser only carries the ID, inside a cookie
 * signed with the server's key.
 *
 * Sessions never expire and are not re-validated against the database.
 */

use std::collections::HashMap;
use std::sync::Arc;

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Name of the cookie carrying the session ID
pub const SESSION_COOKIE: &str = "session_id";

/// Identity stored for a logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user_id: i64,
    pub name: String,
    pub email: String,
}

/// Shared in-memory session store
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionRecord>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record under a fresh random ID and return the ID
    pub async fn create(&self, record: SessionRecord) -> String {
        let session_id = Uuid::new_v4().to_string();
        self.sessions.write().await.insert(session_id.clone(), record);
        session_id
    }

    pub async fn get(&self, session_id: &str) -> Option<SessionRecord> {
        self.sessions.read().await.get(session_id).cloned()
    }

    pub async fn remove(&self, session_id: &str) -> Option<SessionRecord> {
        self.sessions.write().await.remove(session_id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Resolve the session referenced by the request's signed cookie
    ///
    /// A missing cookie, a cookie with a bad signature and an unknown ID all
    /// resolve to `None`.
    pub async fn lookup(&self, jar: &SignedCookieJar) -> Option<SessionRecord> {
        let cookie = jar.get(SESSION_COOKIE)?;
        self.get(cookie.value()).await
    }
}

/// Build the session cookie for a newly created session
pub fn session_cookie(session_id: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie used to remove the session cookie from the browser
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}
