//! Configuration schema definitions.
//!
//! This module defines the configuration fragment structure that providers
//! emit and the hub merges. All types derive Serde traits so a fragment can
//! arrive as JSON (write facade) or TOML (file provider).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One configuration fragment: the unit a provider emits and the unit the
/// store holds after merging.
///
/// Backend and frontend names are map keys, so uniqueness within a fragment
/// is structural. `BTreeMap` keeps serialization order stable.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Configuration {
    /// Named backend definitions.
    pub backends: BTreeMap<String, Backend>,

    /// Named frontend definitions.
    pub frontends: BTreeMap<String, Frontend>,
}

impl Configuration {
    /// True when the fragment carries no entities at all.
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty() && self.frontends.is_empty()
    }
}

/// A named group of servers reachable under one load-balancing policy.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Backend {
    /// Servers keyed by name, each owned by exactly this backend.
    pub servers: BTreeMap<String, Server>,

    /// Load-balancing policy for this backend's servers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer: Option<LoadBalancer>,
}

/// A single addressable endpoint within a backend.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Server {
    /// Endpoint URL (e.g., "http://10.0.0.12:8080").
    pub url: String,

    /// Weight for weighted load balancing (default: 1).
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_weight() -> u32 {
    1
}

/// Load-balancing policy selection.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoadBalancer {
    /// Balancing method.
    #[serde(default)]
    pub method: BalancerMethod,
}

/// Supported load-balancing methods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalancerMethod {
    /// Weighted round robin.
    #[default]
    Wrr,
    /// Dynamic round robin.
    Drr,
}

/// A routing rule that targets a backend by name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Frontend {
    /// Name of the backend this frontend forwards to.
    pub backend: String,

    /// Matching rules keyed by name.
    pub routes: BTreeMap<String, Route>,
}

/// One matching rule of a frontend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Route {
    /// Rule kind (e.g., "Host", "PathPrefix").
    pub rule: String,

    /// Rule operand (e.g., "example.com", "/api").
    pub value: String,
}
