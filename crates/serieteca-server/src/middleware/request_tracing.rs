// SPDX-License-Identifier: Apache-2.0

use crate::http::handlers::{propagated_request_id, with_request_id};
use crate::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;

pub(crate) async fn request_tracing_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let route = request.uri().path().to_string();
    let request_id = propagated_request_id(request.headers(), &state);

    let span = tracing::info_span!(
        "http.request",
        request_id = %request_id,
        method = %method,
        route = %route,
    );

    let response = next.run(request).instrument(span).await;
    state
        .metrics
        .observe_request(&route, response.status())
        .await;
    with_request_id(response, &request_id)
}
