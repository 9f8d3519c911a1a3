//! Error types for the query layer.
//!
//! Parsing and compiling a filter expression never fails: malformed input is
//! handled leniently and produces a best-effort descriptor. The errors defined
//! here come from the query engine a compiled request is eventually handed to.

use thiserror::Error;

/// Prefix the ORM query engine puts in front of its "no row" style messages.
pub const ENGINE_ERROR_PREFIX: &str = "<QuerySeter> ";

/// The primary error type for query execution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The engine matched no rows for the entity.
    #[error("no rows found for {entity}")]
    NoRows {
        /// The entity that was queried.
        entity: String,
    },

    /// The backing engine reported a failure.
    #[error("query engine error: {message}")]
    Engine {
        /// Engine message with the engine's noise prefix removed.
        message: String,
    },

    /// The executor refused the request before running it.
    #[error("invalid request: {message}")]
    InvalidRequest {
        /// Why the request was refused.
        message: String,
    },
}

impl QueryError {
    /// Builds an [`QueryError::Engine`] from a raw engine message.
    pub fn engine(message: impl AsRef<str>) -> Self {
        QueryError::Engine {
            message: clear_error_prefix(message.as_ref()).to_string(),
        }
    }

    /// Builds a [`QueryError::NoRows`] for the given entity.
    pub fn no_rows(entity: impl Into<String>) -> Self {
        QueryError::NoRows {
            entity: entity.into(),
        }
    }

    /// Builds a [`QueryError::InvalidRequest`].
    pub fn invalid(message: impl Into<String>) -> Self {
        QueryError::InvalidRequest {
            message: message.into(),
        }
    }
}

/// Removes the [`ENGINE_ERROR_PREFIX`] from an engine message, if present.
pub fn clear_error_prefix(message: &str) -> &str {
    message
        .strip_prefix(ENGINE_ERROR_PREFIX)
        .unwrap_or(message)
}

/// Result type alias for query execution.
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_error_prefix() {
        assert_eq!(
            clear_error_prefix("<QuerySeter> no row found"),
            "no row found"
        );
        assert_eq!(clear_error_prefix("connection refused"), "connection refused");
    }

    #[test]
    fn test_engine_constructor_strips_prefix() {
        let err = QueryError::engine("<QuerySeter> no row found");
        assert_eq!(
            err,
            QueryError::Engine {
                message: "no row found".to_string()
            }
        );
        assert_eq!(err.to_string(), "query engine error: no row found");
    }

    #[test]
    fn test_no_rows_display() {
        let err = QueryError::no_rows("orders");
        assert_eq!(err.to_string(), "no rows found for orders");
    }
}
