//! Configuration providers.
//!
//! A provider is an independent source of configuration fragments, identified
//! by a stable name. Each provider pushes [`ConfigMessage`] values into the
//! aggregator; the aggregator keeps the latest fragment per provider name.
//!
//! Shipped providers:
//! - [`web::WebProvider`]: the HTTP(S) listener; serves the read facade and
//!   accepts fragments on `PUT /api` under the fixed identity `"web"`
//! - [`file::FileProvider`]: loads a TOML fragment from disk under the
//!   identity `"file"`, optionally re-emitting on file change

pub mod file;
pub mod web;

use crate::config::schema::Configuration;

/// Provider identity used for fragments submitted through the write facade.
pub const WEB_PROVIDER: &str = "web";

/// Provider identity used for fragments loaded from disk.
pub const FILE_PROVIDER: &str = "file";

/// The unit of change: one provider's full configuration fragment.
///
/// Immutable once created; consumed exactly once by the aggregator.
#[derive(Debug, Clone)]
pub struct ConfigMessage {
    /// Stable identity of the emitting provider.
    pub provider_name: String,

    /// The full fragment replacing this provider's previous one.
    pub configuration: Configuration,
}

impl ConfigMessage {
    pub fn new(provider_name: impl Into<String>, configuration: Configuration) -> Self {
        Self {
            provider_name: provider_name.into(),
            configuration,
        }
    }
}
