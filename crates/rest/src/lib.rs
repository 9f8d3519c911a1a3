//! # apiql-rest - Query-String Driven List API
//!
//! This crate exposes list endpoints whose filtering, sorting, projection and
//! pagination are driven entirely by the query string, as parsed and compiled
//! by [`apiql_query`]. Storage is provided by a
//! [`QueryExecutor`](apiql_query::core::QueryExecutor) implementation.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use apiql_rest::{create_app_with_config, init_logging, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env();
//!     init_logging(&config.log_level);
//!
//!     let executor = MyOrmExecutor::connect(&database_url).await?;
//!     let app = create_app_with_config(executor, config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |------------|-------------|-------------|
//! | list | GET | `/[entity]?params` |
//! | health | GET | `/health` |
//! | liveness | GET | `/_liveness` |
//!
//! ## Query Parameters
//!
//! `fields`, `groupby`, `sortby`, `order`, `offset`, `limit`, `join` and
//! `query`; see [`apiql_query`] for the grammar.
//!
//! ## Responses
//!
//! Successful lists return `{"totals": n, "data": [...]}`. Errors return
//! `{"success": false, "error": {...}}`; see [`error`] for status codes.
//!
//! ## Architecture
//!
//! - [`error`] - Error types and failure envelopes
//! - [`config`] - Server configuration
//! - [`state`] - Application state (executor, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Axum extractors for list requests
//! - [`responses`] - Response envelopes
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use apiql_query::core::QueryExecutor;
use axum::Router;
use axum::http::HeaderValue;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
pub fn create_app<E>(executor: E) -> Router
where
    E: QueryExecutor + 'static,
{
    create_app_with_config(executor, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Example
///
/// ```rust,ignore
/// use apiql_rest::{create_app_with_config, ServerConfig};
///
/// let config = ServerConfig {
///     default_limit: 25,
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(executor, config);
/// ```
pub fn create_app_with_config<E>(executor: E, config: ServerConfig) -> Router
where
    E: QueryExecutor + 'static,
{
    info!(
        "Creating list API server with backend: {}",
        executor.backend_name()
    );

    let state = AppState::new(Arc::new(executor), config.clone());
    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins == "*" {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(parse_origins(&config.cors_origins))
    }
}

/// Splits a comma-separated origin list, skipping entries that are not valid
/// header values.
fn parse_origins(origins: &str) -> Vec<HeaderValue> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` overrides
/// the level.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "apiql_rest={level},apiql_query={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        let origins = parse_origins("http://a.example, http://b.example:8080");
        assert_eq!(
            origins,
            vec![
                HeaderValue::from_static("http://a.example"),
                HeaderValue::from_static("http://b.example:8080"),
            ]
        );
    }

    #[test]
    fn test_parse_origins_skips_invalid() {
        let origins = parse_origins("http://a.example,,bad\norigin");
        assert_eq!(origins, vec![HeaderValue::from_static("http://a.example")]);
    }
}
