//! Read and write facade handlers.
//!
//! Every read handler takes exactly one snapshot from the store and answers
//! entirely from it, so no response mixes two merged configurations. The
//! write handler is the only ingress for the `"web"` provider identity.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::AppState;
use crate::config::schema::{Backend, Configuration, Frontend, Server};
use crate::config::validation::validate;
use crate::health::HealthSnapshot;
use crate::provider::{ConfigMessage, WEB_PROVIDER};

/// GET /api: the whole merged configuration.
pub async fn get_config(State(state): State<AppState>) -> Json<Arc<Configuration>> {
    Json(state.store.read())
}

/// GET /health: opaque process snapshot.
pub async fn get_health(State(state): State<AppState>) -> Json<HealthSnapshot> {
    let cfg = state.store.read();
    Json(
        state
            .health
            .snapshot(cfg.backends.len(), cfg.frontends.len()),
    )
}

/// GET /api/backends
pub async fn get_backends(State(state): State<AppState>) -> Json<BTreeMap<String, Backend>> {
    Json(state.store.read().backends.clone())
}

/// GET /api/backends/{backend}
pub async fn get_backend(
    State(state): State<AppState>,
    Path(backend): Path<String>,
) -> Result<Json<Backend>, ApiError> {
    state
        .store
        .backend(&backend)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("backend", backend))
}

/// GET /api/backends/{backend}/servers
pub async fn get_servers(
    State(state): State<AppState>,
    Path(backend): Path<String>,
) -> Result<Json<BTreeMap<String, Server>>, ApiError> {
    state
        .store
        .backend(&backend)
        .map(|b| Json(b.servers))
        .ok_or_else(|| ApiError::not_found("backend", backend))
}

/// GET /api/backends/{backend}/servers/{server}
pub async fn get_server(
    State(state): State<AppState>,
    Path((backend, server)): Path<(String, String)>,
) -> Result<Json<Server>, ApiError> {
    state
        .store
        .server(&backend, &server)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("server", server))
}

/// GET /api/frontends
pub async fn get_frontends(State(state): State<AppState>) -> Json<BTreeMap<String, Frontend>> {
    Json(state.store.read().frontends.clone())
}

/// GET /api/frontends/{frontend}
pub async fn get_frontend(
    State(state): State<AppState>,
    Path(frontend): Path<String>,
) -> Result<Json<Frontend>, ApiError> {
    state
        .store
        .frontend(&frontend)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("frontend", frontend))
}

/// PUT /api: submit a configuration fragment as provider "web".
///
/// The fragment is parsed and validated before anything is enqueued; a bad
/// payload never enters the pipeline. On success the response is the merged
/// configuration that already includes the submitted fragment.
pub async fn put_config(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Arc<Configuration>>, ApiError> {
    let configuration: Configuration = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "Error parsing configuration");
        ApiError::Validation(format!("Error parsing configuration: {}", e))
    })?;

    validate(&configuration).map_err(|errors| {
        let joined = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        tracing::error!(errors = %joined, "Rejected configuration");
        ApiError::Validation(joined)
    })?;

    let merged = state
        .aggregator
        .ingest_and_read(ConfigMessage::new(WEB_PROVIDER, configuration))
        .await
        .ok_or(ApiError::Unavailable("configuration pipeline stopped"))?;
    Ok(Json(merged))
}
