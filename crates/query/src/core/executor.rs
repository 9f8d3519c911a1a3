//! Query execution collaborator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::compiler::CompiledQuery;
use crate::condition::Condition;
use crate::error::QueryResult;

/// One page of results with the total match count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryPage {
    /// Rows of the page, already projected.
    pub rows: Vec<serde_json::Value>,
    /// Number of rows matching the condition, ignoring pagination.
    pub totals: u64,
}

impl QueryPage {
    /// Creates a page.
    pub fn new(rows: Vec<serde_json::Value>, totals: u64) -> Self {
        Self { rows, totals }
    }

    /// Returns true if the page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A query engine that runs compiled list requests.
///
/// Implementations translate the compiled condition, sort and projection
/// into whatever their storage understands. The compiler has already done
/// all the parsing, so executors never see the raw query string.
///
/// # Example
///
/// ```ignore
/// use apiql_query::compiler::CompiledQuery;
/// use apiql_query::condition::ConditionTree;
/// use apiql_query::core::{QueryExecutor, QueryPage};
///
/// struct Orm { /* ... */ }
///
/// #[async_trait::async_trait]
/// impl QueryExecutor for Orm {
///     type Condition = ConditionTree;
///
///     fn backend_name(&self) -> &str {
///         "orm"
///     }
///
///     async fn fetch(
///         &self,
///         entity: &str,
///         query: &CompiledQuery<ConditionTree>,
///     ) -> QueryResult<QueryPage> {
///         // translate and run
///     }
/// }
/// ```
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// The condition type this engine consumes.
    type Condition: Condition + Send + Sync;

    /// Returns a short name for logs and health checks.
    fn backend_name(&self) -> &str;

    /// Runs a compiled query against an entity.
    ///
    /// # Errors
    ///
    /// * `QueryError::NoRows` - Nothing matched and the engine treats that as an error
    /// * `QueryError::InvalidRequest` - The entity or projection is not known
    /// * `QueryError::Engine` - The engine failed
    async fn fetch(
        &self,
        entity: &str,
        query: &CompiledQuery<Self::Condition>,
    ) -> QueryResult<QueryPage>;
}
