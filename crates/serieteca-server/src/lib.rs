#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, put};
use axum::Router;
use serieteca_store::SerieStore;
use std::collections::HashMap;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tokio::sync::Mutex;

mod config;
mod http;
mod middleware;

pub use config::{validate_startup_config, ApiConfig};
pub use http::errors::{map_error, ApiError, ApiErrorCode};

pub const CRATE_NAME: &str = "serieteca-server";

/// Per-route request counters, keyed by route and response status.
#[derive(Default)]
pub struct RequestMetrics {
    counts: Mutex<HashMap<(String, u16), u64>>,
}

impl RequestMetrics {
    pub(crate) async fn observe_request(&self, route: &str, status: StatusCode) {
        let mut counts = self.counts.lock().await;
        *counts
            .entry((route.to_string(), status.as_u16()))
            .or_insert(0) += 1;
    }

    pub async fn snapshot(&self) -> Vec<((String, u16), u64)> {
        let counts = self.counts.lock().await;
        let mut out: Vec<_> = counts.iter().map(|(k, v)| (k.clone(), *v)).collect();
        out.sort();
        out
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SerieStore>,
    pub api: ApiConfig,
    pub metrics: Arc<RequestMetrics>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn SerieStore>) -> Self {
        Self::with_config(store, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(store: Arc<dyn SerieStore>, api: ApiConfig) -> Self {
        Self {
            store,
            api,
            metrics: Arc::new(RequestMetrics::default()),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::pages::index_handler))
        .route("/series", get(http::pages::series_index_handler))
        .route("/series/:id", get(http::pages::serie_detail_handler))
        .route("/healthz", get(http::handlers::healthz_handler))
        .route(
            "/api/series",
            get(http::handlers::list_series_handler).post(http::handlers::create_serie_handler),
        )
        .route(
            "/api/series/:id",
            put(http::handlers::update_serie_handler)
                .delete(http::handlers::delete_serie_handler),
        )
        .layer(from_fn_with_state(
            state.clone(),
            middleware::request_tracing::request_tracing_middleware,
        ))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
