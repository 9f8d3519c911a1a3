//! List handler.
//!
//! `GET [base]/[entity]?fields=..&query=..&sortby=..&order=..&limit=..&offset=..`
//!
//! Parses the query string, compiles the filter expression and hands the
//! compiled query to the executor. The response envelope reports the match
//! count under `totals` and the page under `data`.

use apiql_query::compiler::CompiledQuery;
use apiql_query::core::QueryExecutor;
use axum::{
    Json,
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::ListQuery;
use crate::responses::ResponseEnvelope;
use crate::state::AppState;

/// Handler for listing an entity.
///
/// # HTTP Request
///
/// `GET [base]/[entity]?params`
///
/// # Response
///
/// - `200 OK` - `{"totals": n, "data": [...]}`
/// - `400 Bad Request` - The executor rejected the request
/// - `404 Not Found` - The executor reported no rows
/// - `500 Internal Server Error` - The query engine failed
pub async fn list_handler<E>(
    State(state): State<AppState<E>>,
    Path(entity): Path<String>,
    query: ListQuery,
) -> RestResult<Response>
where
    E: QueryExecutor + 'static,
{
    let descriptor = query.descriptor();
    debug!(
        entity = %entity,
        groups = descriptor.filter_groups.len(),
        limit = descriptor.limit,
        offset = descriptor.offset,
        "Processing list request"
    );

    let compiled: CompiledQuery<E::Condition> = query.compile();
    let page = state.executor().fetch(&entity, &compiled).await?;

    debug!(
        entity = %entity,
        rows = page.rows.len(),
        totals = page.totals,
        "List request completed"
    );

    let envelope = ResponseEnvelope::new().with_totals(page.totals).success(
        &Method::GET,
        0,
        Some(Value::Array(page.rows)),
    );

    Ok((StatusCode::OK, Json(envelope)).into_response())
}
