//! Atomic storage for the merged configuration.
//!
//! # Responsibilities
//! - Hold the configuration currently exposed to readers
//! - Serve lock-free point-in-time snapshots to any number of readers
//! - Accept wholesale replacement from the single writer (the aggregator)
//!
//! # Design Decisions
//! - `arc_swap::ArcSwap` gives atomic visibility: a reader sees either the
//!   fully-old or fully-new configuration, never a mix
//! - Published configurations are never mutated in place; every update is a
//!   freshly built `Arc<Configuration>` swapped in whole
//! - By-name lookups report `None` for absent names, never a default value

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::{Backend, Configuration, Frontend, Server};

/// Holds the current merged configuration.
///
/// Single writer (the aggregator's drain task), many concurrent readers.
/// Reads never block each other and never block a replace.
pub struct ConfigStore {
    current: ArcSwap<Configuration>,
}

impl ConfigStore {
    /// Create a store holding an empty configuration.
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(Configuration::default()),
        }
    }

    /// Atomically replace the exposed configuration.
    ///
    /// Readers in flight keep their old snapshot; new reads see `cfg`.
    pub fn replace(&self, cfg: Configuration) {
        self.replace_arc(Arc::new(cfg));
    }

    /// Like [`replace`](Self::replace), for callers that already share the
    /// snapshot (the aggregator hands the same `Arc` back to write-facade
    /// acks).
    pub fn replace_arc(&self, cfg: Arc<Configuration>) {
        self.current.store(cfg);
    }

    /// Point-in-time snapshot of the merged configuration.
    ///
    /// Every facade read must derive from exactly one `read` call so that no
    /// response spans two underlying snapshots.
    pub fn read(&self) -> Arc<Configuration> {
        self.current.load_full()
    }

    /// Look up one backend by name.
    pub fn backend(&self, name: &str) -> Option<Backend> {
        self.read().backends.get(name).cloned()
    }

    /// Look up one frontend by name.
    pub fn frontend(&self, name: &str) -> Option<Frontend> {
        self.read().frontends.get(name).cloned()
    }

    /// Look up one server by backend and server name.
    ///
    /// Absent backend and absent server are both reported as `None`.
    pub fn server(&self, backend: &str, server: &str) -> Option<Server> {
        self.read()
            .backends
            .get(backend)
            .and_then(|b| b.servers.get(server))
            .cloned()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
