//! HTTP(S) provider listener.
//!
//! # Responsibilities
//! - Bind one listener per configured provider instance
//! - Serve the read facade and accept fragments on PUT /api
//! - Switch to TLS when both a certificate and a key are supplied
//!
//! # Design Decisions
//! - Binding happens before the serve task is spawned, so bind errors reach
//!   the caller and the process can exit with a useful message
//! - A serve-loop failure after startup is fatal to the whole process: there
//!   is no supervisor that could restart a single listener, and a silently
//!   dead provider endpoint is worse than a crash
//! - The bound address is returned to support binding to port 0

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::aggregator::Aggregator;
use crate::api::{build_router, AppState};
use crate::health::Health;
use crate::net::tls::load_tls_config;
use crate::net::ListenerError;
use crate::store::ConfigStore;

/// One HTTP(S) listener instance serving the configuration facades.
pub struct WebProvider {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub address: String,

    /// Certificate file (PEM). TLS is enabled only together with `key_file`.
    pub cert_file: Option<PathBuf>,

    /// Private key file (PEM).
    pub key_file: Option<PathBuf>,
}

impl WebProvider {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            cert_file: None,
            key_file: None,
        }
    }

    pub fn with_tls(mut self, cert_file: PathBuf, key_file: PathBuf) -> Self {
        self.cert_file = Some(cert_file);
        self.key_file = Some(key_file);
        self
    }

    /// Bind the listener and spawn the serve loop.
    ///
    /// Returns the bound address once the listener is accepting; the serve
    /// loop runs until process exit. Bind and TLS-load errors are returned,
    /// serve-loop errors terminate the process (see module docs).
    pub async fn provide(
        &self,
        store: Arc<ConfigStore>,
        aggregator: Aggregator,
        health: Arc<Health>,
    ) -> Result<SocketAddr, ListenerError> {
        let addr: SocketAddr = self.address.parse().map_err(|e| {
            ListenerError::Bind(std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
        })?;

        let state = AppState {
            store,
            aggregator,
            health,
        };
        let app = build_router(state);

        if let (Some(cert), Some(key)) = (&self.cert_file, &self.key_file) {
            let tls = load_tls_config(cert, key).await?;

            let listener = std::net::TcpListener::bind(addr).map_err(ListenerError::Bind)?;
            listener
                .set_nonblocking(true)
                .map_err(ListenerError::Bind)?;
            let local_addr = listener.local_addr().map_err(ListenerError::Bind)?;

            tracing::info!(address = %local_addr, "Provider listener bound (TLS)");

            tokio::spawn(async move {
                let result = axum_server::from_tcp_rustls(listener, tls)
                    .serve(app.into_make_service())
                    .await;
                fatal_serve_exit(result);
            });
            return Ok(local_addr);
        }

        // TLS only with a complete pair; a lone cert or key is ignored.
        if self.cert_file.is_some() || self.key_file.is_some() {
            tracing::warn!("Incomplete TLS configuration, serving plaintext");
        }

        let listener = TcpListener::bind(addr).await.map_err(ListenerError::Bind)?;
        let local_addr = listener.local_addr().map_err(ListenerError::Bind)?;

        tracing::info!(address = %local_addr, "Provider listener bound");

        tokio::spawn(async move {
            let result = axum::serve(listener, app).await;
            fatal_serve_exit(result);
        });
        Ok(local_addr)
    }
}

/// A listener that stops serving is unrecoverable: log and take the process
/// down rather than keep running with a dead endpoint.
fn fatal_serve_exit(result: Result<(), std::io::Error>) -> ! {
    match result {
        Ok(()) => tracing::error!("Provider listener stopped unexpectedly"),
        Err(e) => tracing::error!(error = %e, "Provider listener failed"),
    }
    std::process::exit(1);
}
