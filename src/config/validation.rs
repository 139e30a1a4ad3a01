//! Configuration fragment validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (frontends reference existing backends)
//! - Validate value ranges (server URLs parse, weights non-zero)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: Configuration → Result<(), Vec<ValidationError>>
//! - Runs at the ingress boundary (write facade, file provider) before a
//!   fragment is handed to the aggregator; the aggregator itself never
//!   validates

use thiserror::Error;
use url::Url;

use crate::config::schema::Configuration;

/// A single semantic problem found in a configuration fragment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("backend '{backend}' has no servers")]
    EmptyBackend { backend: String },

    #[error("server '{server}' in backend '{backend}' has an invalid URL '{url}'")]
    InvalidServerUrl {
        backend: String,
        server: String,
        url: String,
    },

    #[error("server '{server}' in backend '{backend}' has zero weight")]
    ZeroWeight { backend: String, server: String },

    #[error("frontend '{frontend}' references unknown backend '{backend}'")]
    UnknownBackend { frontend: String, backend: String },

    #[error("frontend '{frontend}' has no routes")]
    EmptyFrontend { frontend: String },
}

/// Validate a fragment, collecting every problem found.
pub fn validate(cfg: &Configuration) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (backend_name, backend) in &cfg.backends {
        if backend.servers.is_empty() {
            errors.push(ValidationError::EmptyBackend {
                backend: backend_name.clone(),
            });
        }
        for (server_name, server) in &backend.servers {
            if Url::parse(&server.url).is_err() {
                errors.push(ValidationError::InvalidServerUrl {
                    backend: backend_name.clone(),
                    server: server_name.clone(),
                    url: server.url.clone(),
                });
            }
            if server.weight == 0 {
                errors.push(ValidationError::ZeroWeight {
                    backend: backend_name.clone(),
                    server: server_name.clone(),
                });
            }
        }
    }

    for (frontend_name, frontend) in &cfg.frontends {
        if !cfg.backends.contains_key(&frontend.backend) {
            errors.push(ValidationError::UnknownBackend {
                frontend: frontend_name.clone(),
                backend: frontend.backend.clone(),
            });
        }
        if frontend.routes.is_empty() {
            errors.push(ValidationError::EmptyFrontend {
                frontend: frontend_name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
