//! Post HTTP Handlers

pub mod home;
pub mod register_post;
pub mod delete_post;

pub use delete_post::delete_post;
pub use home::home;
pub use register_post::{register_post, register_post_page};
