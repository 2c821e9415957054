//! Router construction

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::{limit::GlobalConcurrencyLimitLayer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::handlers;
use crate::middleware::metrics::track_requests;
use crate::AppState;

/// Create the main application router
pub fn create_router(state: AppState, metrics: Option<PrometheusHandle>) -> Router {
    let max_body_bytes = state.config.server.max_body_bytes;
    let max_concurrent = state.config.server.max_concurrent_requests;
    let timeout = state.config.request_timeout();

    // The search page is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        // Health endpoints
        .route("/health", get(handlers::health::health))
        .route("/ready", get(handlers::health::ready))

        // Search endpoint
        .route(
            "/api/search",
            post(handlers::search::search).fallback(handlers::not_found),
        );

    if let Some(handle) = metrics {
        router = router.route("/metrics", get(move || std::future::ready(handle.render())));
    }

    router
        .route_layer(middleware::from_fn(track_requests))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(
            ServiceBuilder::new()
                // Request ID propagation (outermost, so every response carries it)
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                // Request timeout
                .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
                // Concurrency limit for backpressure. `Router::layer` wraps every
                // route separately, so the semaphore must be shared between them.
                .layer(GlobalConcurrencyLimitLayer::new(max_concurrent)),
        )
        .with_state(state)
}
