//! Error types for the list API.
//!
//! Every error renders as a failure envelope (see [`crate::responses`]) with
//! an HTTP status:
//!
//! | Error | HTTP Status | `error` body |
//! |-------|-------------|--------------|
//! | BadRequest | 400 | `{"orm": message}` |
//! | NotFound | 404 | `{"orm": message}` |
//! | Validation | 422 | field → message map |
//! | Internal | 500 | `{"orm": message}` |
//!
//! Query engine errors convert as follows: `NoRows` → NotFound,
//! `InvalidRequest` → BadRequest, `Engine` → Internal.

use std::collections::BTreeMap;
use std::fmt;

use apiql_query::QueryError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::responses::{FailureDetail, ResponseEnvelope};

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Malformed or unsupported request (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Nothing to return (HTTP 404).
    NotFound {
        /// The entity that was queried.
        entity: String,
    },

    /// Input failed validation (HTTP 422).
    ///
    /// Never produced by the list route; write handlers of the embedding
    /// application return it from their own validators.
    Validation {
        /// Field name to message.
        fields: BTreeMap<String, String>,
    },

    /// Internal or engine error (HTTP 500).
    Internal {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::NotFound { entity } => write!(f, "No rows found for {}", entity),
            RestError::Validation { fields } => {
                write!(f, "Validation failed for {} field(s)", fields.len())
            }
            RestError::Internal { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl RestError {
    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            RestError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the failure envelope for this error.
    pub fn envelope(&self) -> ResponseEnvelope {
        let detail = match self {
            RestError::BadRequest { message } | RestError::Internal { message } => {
                FailureDetail::Engine(message.clone())
            }
            RestError::NotFound { entity } => {
                FailureDetail::Engine(format!("no rows found for {}", entity))
            }
            RestError::Validation { fields } => FailureDetail::Fields(fields.clone()),
        };
        ResponseEnvelope::fail(detail)
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.envelope())).into_response()
    }
}

impl From<QueryError> for RestError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::NoRows { entity } => RestError::NotFound { entity },
            QueryError::InvalidRequest { message } => RestError::BadRequest { message },
            QueryError::Engine { message } => RestError::Internal { message },
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
