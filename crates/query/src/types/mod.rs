//! Core types for query-string driven list requests.
//!
//! - [`RawParams`] - Decoded query parameters
//! - [`RequestDescriptor`], [`FilterGroup`] - Parsed list request
//! - [`SortSpec`] - Engine sort tokens built from `sortby` and `order`
//!
//! # Example
//!
//! ```
//! use apiql_query::types::{RawParams, RequestDescriptor};
//!
//! let params = RawParams::parse("fields=id,name&sortby=profile.age&order=desc&limit=abc");
//! let descriptor = RequestDescriptor::from_params(&params);
//!
//! assert_eq!(descriptor.fields, vec!["id", "name"]);
//! assert_eq!(descriptor.sort_by, vec!["profile__age"]);
//! assert_eq!(descriptor.limit, 0);
//! ```

mod descriptor;
mod params;
mod sort;

pub use descriptor::{
    DEFAULT_LIMIT, DEFAULT_OFFSET, DescriptorDefaults, FilterGroup, RequestDescriptor,
};
pub use params::RawParams;
pub use sort::{SortDirection, SortDirective, SortSpec};
