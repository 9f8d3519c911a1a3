//! Route configuration for the list API.

pub mod routes;

pub use routes::create_routes;
