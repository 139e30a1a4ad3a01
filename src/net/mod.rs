//! Network plumbing for provider listeners.
//!
//! # Responsibilities
//! - Load TLS material for encrypted listeners
//! - Define the fatal listener error type
//!
//! # Design Decisions
//! - A listener that fails to bind or serve is fatal to the whole process;
//!   there is no retry or degraded mode (the process has no supervisor that
//!   could restart a single listener)

pub mod tls;

/// Errors that terminate a provider listener.
#[derive(Debug)]
pub enum ListenerError {
    /// Failed to bind to the configured address.
    Bind(std::io::Error),
    /// Failed to load TLS certificate or key.
    Tls(std::io::Error),
}

impl std::fmt::Display for ListenerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListenerError::Bind(e) => write!(f, "Failed to bind: {}", e),
            ListenerError::Tls(e) => write!(f, "Failed to load TLS material: {}", e),
        }
    }
}

impl std::error::Error for ListenerError {}
