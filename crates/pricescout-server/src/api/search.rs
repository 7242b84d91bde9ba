//! The `/search` aggregation endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::{Extension, Json};
use serde::Deserialize;

use pricescout_search::{SearchError, SearchOutcome};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    #[serde(default)]
    query: String,
}

pub(super) async fn search_get(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchOutcome>, ApiError> {
    run_search(&state, &req_id, &params.query).await
}

pub(super) async fn search_post(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<SearchParams>, JsonRejection>,
) -> Result<Json<SearchOutcome>, ApiError> {
    // An unreadable body is an internal failure at this boundary, not a
    // validation error: the contract answers 500 with best-effort details.
    let Json(params) = body.map_err(|rejection| {
        tracing::error!(request_id = %req_id.0, error = %rejection, "unreadable search request body");
        ApiError::Internal(rejection.to_string())
    })?;
    run_search(&state, &req_id, &params.query).await
}

async fn run_search(
    state: &AppState,
    req_id: &RequestId,
    query: &str,
) -> Result<Json<SearchOutcome>, ApiError> {
    match state.service.search(query).await {
        Ok(outcome) => {
            tracing::debug!(
                request_id = %req_id.0,
                source = %outcome.source,
                results = outcome.results.len(),
                "search request served"
            );
            Ok(Json(outcome))
        }
        Err(SearchError::EmptyQuery) => Err(ApiError::MissingQuery),
        Err(e) => {
            tracing::error!(request_id = %req_id.0, error = %e, "search request failed");
            Err(ApiError::Internal(e.to_string()))
        }
    }
}
