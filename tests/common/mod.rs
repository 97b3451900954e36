//! Common test utilities and helpers
//!
//! - a fully wired application backed by a temporary SQLite file
//! - form helpers for registering, logging in and scheduling posts

#![allow(dead_code)]

use axum_test::multipart::{MultipartForm, Part};
use axum_test::{TestResponse, TestServer};
use tempfile::TempDir;

use post_scheduler::backend::auth::users::get_user_by_email;
use post_scheduler::backend::posts::db::{get_posts_for_user, Post};
use post_scheduler::backend::routes::create_router;
use post_scheduler::backend::server::{build_state, AppState, ServerConfig};

/// Application under test plus the temporary directory backing it
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = ServerConfig {
            database_url: format!("sqlite:{}", dir.path().join("test.db").display()),
            upload_dir: dir.path().join("uploads"),
            session_secret: Some("test-secret-".repeat(8)),
            port: 0,
            bcrypt_cost: 4,
        };

        let state = build_state(&config).await.expect("Failed to build app state");
        let server = browser(&state);

        Self { server, state, dir }
    }

    /// A second browser with its own cookie jar, sharing the same backend
    pub fn another_browser(&self) -> TestServer {
        browser(&self.state)
    }

    pub fn upload_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("uploads")
    }

    pub async fn user_id(&self, email: &str) -> i64 {
        get_user_by_email(&self.state.db_pool, email)
            .await
            .expect("Database error")
            .expect("User not found")
            .id
    }

    pub async fn posts_of(&self, email: &str) -> Vec<Post> {
        let id = self.user_id(email).await;
        get_posts_for_user(&self.state.db_pool, id)
            .await
            .expect("Database error")
    }
}

fn browser(state: &AppState) -> TestServer {
    TestServer::builder()
        .save_cookies()
        .build(create_router(state.clone()))
        .expect("Failed to create test server")
}

pub async fn register(
    server: &TestServer,
    email: &str,
    password: &str,
    access_token: Option<&str>,
) -> TestResponse {
    server
        .post("/register")
        .form(&[
            ("name", "Test User"),
            ("email", email),
            ("password", password),
            ("platform_account_id", "test_account"),
            ("access_token", access_token.unwrap_or("")),
        ])
        .await
}

pub async fn login(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/login")
        .form(&[("email", email), ("password", password)])
        .await
}

/// Submit the scheduling form, optionally with a photo `(file name, bytes)`
pub async fn schedule(
    server: &TestServer,
    user_id: impl ToString,
    text: &str,
    post_time: &str,
    photo: Option<(&str, Vec<u8>)>,
) -> TestResponse {
    let mut form = MultipartForm::new()
        .add_text("user_id", user_id.to_string())
        .add_text("post", text)
        .add_text("post_time", post_time);

    if let Some((file_name, bytes)) = photo {
        form = form.add_part(
            "photo",
            Part::bytes(bytes)
                .file_name(file_name)
                .mime_type("application/octet-stream"),
        );
    }

    server.post("/register_post").multipart(form).await
}

pub fn location(response: &TestResponse) -> String {
    response
        .header("location")
        .to_str()
        .expect("Non-ASCII location header")
        .to_string()
}
