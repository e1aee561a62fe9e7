//! REST API handlers for catalog operations
//!
//! Listing, lookup by code, and bulk insertion. Every route is served under
//! `/catalog` and under the older `/produce` prefix.

use super::{error::CatalogError, helpers::PrettyJson, models::ProduceItem, state::SharedState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

/// Creates routes for catalog operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/catalog", get(list_catalog).post(add_produce))
        .route("/catalog/:code", get(get_produce))
        .route("/produce", get(list_catalog).post(add_produce))
        .route("/produce/:code", get(get_produce))
}

/// Endpoint: GET /catalog
/// Returns every entry in insertion order.
async fn list_catalog(State(state): State<SharedState>) -> impl IntoResponse {
    PrettyJson(StatusCode::OK, state.catalog.all().await)
}

/// Endpoint: GET /catalog/:code
async fn get_produce(
    State(state): State<SharedState>,
    Path(code): Path<String>,
) -> Result<PrettyJson<ProduceItem>, CatalogError> {
    let item = state.catalog.lookup(&code).await?;
    Ok(PrettyJson(StatusCode::OK, item))
}

/// Endpoint: POST /catalog
/// Accepts a JSON array of one or more items. Items already present are
/// skipped; the response carries the whole catalog after the merge.
async fn add_produce(
    State(state): State<SharedState>,
    body: Result<Json<Vec<ProduceItem>>, JsonRejection>,
) -> Result<PrettyJson<Vec<ProduceItem>>, CatalogError> {
    let Json(batch) = body.map_err(|e| {
        tracing::warn!(error = %e.body_text(), "rejected request body");
        CatalogError::BadRequestBody(e.body_text())
    })?;

    let catalog = state.catalog.ingest(batch).await?;
    Ok(PrettyJson(StatusCode::CREATED, catalog))
}
