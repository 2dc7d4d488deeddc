// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use serieteca_store::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    SerieNotFound,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn serie_not_found(id: u64) -> Self {
        Self::new(
            ApiErrorCode::SerieNotFound,
            "Serie no encontrada",
            json!({ "id": id }),
        )
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { id } => Self::serie_not_found(id),
        }
    }
}

#[must_use]
pub fn map_error(error: &ApiError) -> StatusCode {
    match error.code {
        ApiErrorCode::SerieNotFound => StatusCode::NOT_FOUND,
        ApiErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn api_error_response(err: ApiError) -> Response {
    let status = map_error(&err);
    (status, Json(json!({ "error": err }))).into_response()
}
