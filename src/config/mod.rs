//! Configuration fragment model and validation.
//!
//! # Data Flow
//! ```text
//! provider (HTTP body / TOML file)
//!     → schema.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → Configuration (validated, immutable fragment)
//!     → aggregator (merge across providers)
//!     → store (atomic publish of the merged view)
//! ```
//!
//! # Design Decisions
//! - A fragment is immutable once emitted; changes require a full re-emit
//! - Backend/frontend names are map keys, so per-fragment uniqueness is
//!   guaranteed by construction
//! - Validation separates syntactic (serde) from semantic checks and never
//!   runs inside the aggregator

pub mod schema;
pub mod validation;

pub use schema::{Backend, Configuration, Frontend, Server};
pub use validation::{validate, ValidationError};
