//! Route configuration.

use apiql_query::core::QueryExecutor;
use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

/// Creates all API routes.
///
/// # Routes
///
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /{entity}` - List
pub fn create_routes<E>(state: AppState<E>) -> Router
where
    E: QueryExecutor + 'static,
{
    Router::new()
        .route("/health", get(handlers::health_handler::<E>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/{entity}", get(handlers::list_handler::<E>))
        .with_state(state)
}
