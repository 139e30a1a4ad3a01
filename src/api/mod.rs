//! HTTP facade over the configuration core.
//!
//! Translates requests into store reads and aggregator submissions; carries
//! no merge or synchronization logic of its own.

pub mod error;
pub mod handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::aggregator::Aggregator;
use crate::health::Health;
use crate::store::ConfigStore;
use self::handlers::*;

/// State injected into every facade handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ConfigStore>,
    pub aggregator: Aggregator,
    pub health: Arc<Health>,
}

/// Build the facade router with all routes and middleware layers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(get_health))
        .route("/api", get(get_config).put(put_config))
        .route("/api/backends", get(get_backends))
        .route("/api/backends/{backend}", get(get_backend))
        .route("/api/backends/{backend}/servers", get(get_servers))
        .route(
            "/api/backends/{backend}/servers/{server}",
            get(get_server),
        )
        .route("/api/frontends", get(get_frontends))
        .route("/api/frontends/{frontend}", get(get_frontend))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            count_requests,
        ))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn count_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    state.health.record_request();
    next.run(req).await
}
