//! HTTP request handlers.
//!
//! - [`list`] - List an entity with filter, sort, projection and pagination
//! - [`health`] - Health check endpoints

pub mod health;
pub mod list;

pub use health::{health_handler, liveness_handler};
pub use list::list_handler;
