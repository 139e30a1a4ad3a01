//! Dynamic configuration hub.
//!
//! Accepts configuration fragments from multiple independent providers,
//! merges them into one consistent view, and serves that view to many
//! concurrent readers while writes are in flight.
//!
//! # Architecture Overview
//!
//! ```text
//!  providers                       core                        readers
//!
//!  ┌──────────┐  ConfigMessage  ┌────────────┐  atomic   ┌───────────┐
//!  │   web    │───────────────▶ │ aggregator │  replace  │   store   │
//!  │ PUT /api │                 │ (1 drain   │──────────▶│ (ArcSwap) │
//!  └──────────┘                 │   task)    │           └─────┬─────┘
//!  ┌──────────┐                 └────────────┘                 │ snapshot
//!  │   file   │───────────────▶   latest fragment              ▼
//!  │ + watch  │                   per provider,          ┌───────────┐
//!  └──────────┘                   union merge            │ GET /api… │
//!                                                        └───────────┘
//! ```
//!
//! The aggregator is the only writer to the store; readers take lock-free
//! point-in-time snapshots and never observe a partially merged view.

// Core subsystems
pub mod aggregator;
pub mod config;
pub mod store;

// Providers and facades
pub mod api;
pub mod net;
pub mod provider;

// Cross-cutting concerns
pub mod health;

pub use aggregator::Aggregator;
pub use config::schema::Configuration;
pub use provider::web::WebProvider;
pub use provider::ConfigMessage;
pub use store::ConfigStore;
