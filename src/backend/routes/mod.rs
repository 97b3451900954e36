//! Route Configuration Module
//!
//! - **`router`** - main router creation and route assembly
//!
//! # Routes
//!
//! | Method   | Path                | Handler                         |
//! |----------|---------------------|---------------------------------|
//! | GET/POST | `/`, `/home`        | `posts::handlers::home`         |
//! | GET/POST | `/login`            | `auth::handlers::login`         |
//! | GET      | `/logout`           | `auth::handlers::logout`        |
//! | GET/POST | `/register`         | `auth::handlers::register`      |
//! | GET/POST | `/register_post`    | `posts::handlers::register_post`|
//! | POST     | `/delete_post/{id}` | `posts::handlers::delete_post`  |

/// Main router creation
pub mod router;

pub use router::create_router;
