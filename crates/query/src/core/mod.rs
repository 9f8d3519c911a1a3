//! Collaborator traits.
//!
//! - [`QueryExecutor`] - Runs a [`CompiledQuery`](crate::compiler::CompiledQuery) and returns a [`QueryPage`]

mod executor;

pub use executor::{QueryExecutor, QueryPage};
