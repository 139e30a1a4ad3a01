//! Process health snapshot served on `GET /health`.
//!
//! Counters are plain atomics bumped from the hot paths; the snapshot is
//! assembled on demand and is intentionally opaque to the configuration
//! core; facades serve it as-is.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use serde::Serialize;

/// Shared health counters.
pub struct Health {
    started_at: Instant,
    requests_total: AtomicU64,
    config_reloads_total: AtomicU64,
    providers_seen: AtomicU64,
}

/// Point-in-time view of the counters, serialized to the caller.
#[derive(Debug, Serialize)]
pub struct HealthSnapshot {
    pub version: &'static str,
    pub status: &'static str,
    pub uptime_secs: u64,
    pub requests_total: u64,
    pub config_reloads_total: u64,
    pub providers_seen: u64,
    pub backends: usize,
    pub frontends: usize,
}

impl Health {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            requests_total: AtomicU64::new(0),
            config_reloads_total: AtomicU64::new(0),
            providers_seen: AtomicU64::new(0),
        }
    }

    /// Count one facade request.
    pub fn record_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one merged-configuration publish.
    pub fn record_reload(&self) {
        self.config_reloads_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the number of distinct providers the aggregator retains.
    pub fn set_providers_seen(&self, count: usize) {
        self.providers_seen.store(count as u64, Ordering::Relaxed);
    }

    /// Assemble a snapshot; entity counts come from the caller's
    /// configuration snapshot so the numbers are mutually consistent.
    pub fn snapshot(&self, backends: usize, frontends: usize) -> HealthSnapshot {
        HealthSnapshot {
            version: env!("CARGO_PKG_VERSION"),
            status: "operational",
            uptime_secs: self.started_at.elapsed().as_secs(),
            requests_total: self.requests_total.load(Ordering::Relaxed),
            config_reloads_total: self.config_reloads_total.load(Ordering::Relaxed),
            providers_seen: self.providers_seen.load(Ordering::Relaxed),
            backends,
            frontends,
        }
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new()
    }
}
