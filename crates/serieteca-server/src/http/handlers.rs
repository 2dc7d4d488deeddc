// SPDX-License-Identifier: Apache-2.0

use crate::http::errors::api_error_response;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serieteca_model::{Serie, SeriePatch};
use std::sync::atomic::Ordering;
use tracing::info;

pub(crate) fn make_request_id(state: &AppState) -> String {
    let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

pub(crate) fn propagated_request_id(headers: &HeaderMap, state: &AppState) -> String {
    if let Some(raw) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    make_request_id(state)
}

pub(crate) fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub(crate) async fn list_series_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list().await)
}

pub(crate) async fn create_serie_handler(
    State(state): State<AppState>,
    Json(candidate): Json<Serie>,
) -> impl IntoResponse {
    let stored = state.store.create(candidate).await;
    info!(id = stored.id, "serie created");
    (StatusCode::CREATED, Json(stored))
}

pub(crate) async fn update_serie_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<SeriePatch>,
) -> Response {
    match state.store.update(id, patch).await {
        Ok(updated) => Json(updated).into_response(),
        Err(e) => api_error_response(e.into()),
    }
}

pub(crate) async fn delete_serie_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Response {
    match state.store.delete(id).await {
        Ok(()) => {
            info!(id, "serie deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => api_error_response(e.into()),
    }
}
