//! Scheduled Posts
//!
//! Storing, listing and deleting scheduled posts, plus the photo upload
//! helper. "Scheduling" only records the requested publish time; nothing
//! acts on it later.
//!
//! - **`db`** - `posts` table operations
//! - **`upload`** - extension check, filename sanitising, file write
//! - **`handlers`** - `/home`, `/register_post`, `/delete_post/{id}`

pub mod db;
pub mod upload;
pub mod handlers;

pub use db::Post;
