//! Authentication Module
//!
//! User registration, login and server-side sessions.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - Session store and session cookie
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Form types
//!     ├── login.rs    - Login form and authentication
//!     ├── logout.rs   - Session removal
//!     └── register.rs - Registration form and user creation
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: form → bcrypt hash → `users` row
//! 2. **Login**: email lookup → bcrypt verify → session record + signed cookie
//! 3. **Logout**: session record removed, cookie cleared
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - The session cookie only carries a random ID and is signed with the server key
//! - Failed logins return one generic message

pub mod users;
pub mod sessions;
pub mod handlers;

pub use handlers::{login, login_page, logout, register, register_page};
pub use sessions::{SessionRecord, SessionStore};
pub use users::User;
