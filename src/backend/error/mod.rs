//! Backend Error Module
//!
//! Error types returned by HTTP handlers and their conversion into responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Response Format
//!
//! Errors are answered with a `text/plain` body. Rejections of user input
//! (for example `Post not found.`) keep a 200 status and read like a page;
//! internal failures become a 500 with a generic message.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
