//! TLS material loading for encrypted provider listeners.

use std::path::Path;

use axum_server::tls_rustls::RustlsConfig;

use crate::net::ListenerError;

/// Load certificate and key (PEM) into a rustls config for the listener.
///
/// Missing files are caught up front so the error names the offending path
/// instead of surfacing as a generic rustls parse failure.
pub async fn load_tls_config(
    cert_path: &Path,
    key_path: &Path,
) -> Result<RustlsConfig, ListenerError> {
    for (path, what) in [(cert_path, "Certificate"), (key_path, "Private key")] {
        if !path.exists() {
            return Err(ListenerError::Tls(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} file not found: {:?}", what, path),
            )));
        }
    }

    RustlsConfig::from_pem_file(cert_path, key_path)
        .await
        .map_err(ListenerError::Tls)
}
