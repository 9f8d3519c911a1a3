//! Axum extractors for list requests.
//!
//! - [`ListQuery`] - Parse the query string into a request descriptor
//! - [`input_keys`] - Top-level keys of a JSON body

mod input_keys;
mod list_query;

pub use input_keys::input_keys;
pub use list_query::ListQuery;
