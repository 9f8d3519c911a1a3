//! List query extractor.
//!
//! Parses the request query string into a [`RequestDescriptor`].

use std::convert::Infallible;

use apiql_query::compiler::CompiledQuery;
use apiql_query::condition::Condition;
use apiql_query::core::QueryExecutor;
use apiql_query::types::{DescriptorDefaults, RawParams, RequestDescriptor};
use axum::{extract::FromRequestParts, http::request::Parts};

use crate::state::AppState;

/// Axum extractor for list request parameters.
///
/// Never rejects: malformed values are handled by the lenient descriptor
/// rules (a non-numeric `limit` becomes `0`, unknown keys are ignored).
///
/// # Example
///
/// ```rust,ignore
/// use apiql_rest::extractors::ListQuery;
///
/// async fn list(query: ListQuery) {
///     println!("limit = {}", query.descriptor().limit);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ListQuery {
    descriptor: RequestDescriptor,
}

impl ListQuery {
    /// Parses a raw query string.
    pub fn from_query(query: &str, defaults: DescriptorDefaults) -> Self {
        let params = RawParams::parse(query);
        Self {
            descriptor: RequestDescriptor::from_params_with(&params, defaults),
        }
    }

    /// Returns the parsed descriptor.
    pub fn descriptor(&self) -> &RequestDescriptor {
        &self.descriptor
    }

    /// Compiles the descriptor for an executor.
    pub fn compile<C: Condition>(&self) -> CompiledQuery<C> {
        CompiledQuery::compile(&self.descriptor)
    }

    /// Consumes the extractor, returning the descriptor.
    pub fn into_inner(self) -> RequestDescriptor {
        self.descriptor
    }
}

impl<E> FromRequestParts<AppState<E>> for ListQuery
where
    E: QueryExecutor + 'static,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<E>,
    ) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();
        Ok(ListQuery::from_query(query, state.descriptor_defaults()))
    }
}
