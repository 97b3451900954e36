//! Authentication HTTP Handlers
//!
//! - **`types`** - form bodies
//! - **`login`** - `GET/POST /login`
//! - **`logout`** - `GET /logout`
//! - **`register`** - `GET/POST /register`

pub mod types;
pub mod login;
pub mod logout;
pub mod register;

pub use login::{authenticate, login, login_page};
pub use logout::logout;
pub use register::{register, register_page};
pub use types::{LoginForm, RegisterForm};
