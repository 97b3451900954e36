/**
 * Registration Handler
 *
 * `GET /register` renders the form, `POST /register` creates the user.
 *
 * There is no duplicate-email pre-check: the UNIQUE constraint rejects the
 * insert and the request fails as an internal error.
 */

use axum::{
    extract::{Form, State},
    response::Html,
};
use bcrypt::hash;

use crate::backend::auth::handlers::types::RegisterForm;
use crate::backend::auth::users::{create_user, NewUser};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::views;

/// Body returned after a successful registration
pub const REGISTERED: &str = "User registered successfully!";

pub async fn register_page() -> Html<String> {
    views::register_page()
}

pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<&'static str, BackendError> {
    tracing::info!("Registration request for: {}", form.email);

    let password_hash = hash(&form.password, state.bcrypt_cost)?;
    let access_token = form.access_token();

    let user = create_user(
        &state.db_pool,
        NewUser {
            name: form.name,
            email: form.email,
            password_hash,
            platform_account_id: form.platform_account_id,
            access_token,
        },
    )
    .await?;

    tracing::info!("User registered: {} (id {})", user.email, user.id);
    Ok(REGISTERED)
}
