//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! cookie parser produces:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (request and signed cookie counters)
//!
//! Consumers:
//!     → stdout (tracing-subscriber fmt layer)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Cookie values and secrets are never logged, only names and counts
//! - Metrics are cheap (atomic increments); no-ops without a recorder

pub mod logging;
pub mod metrics;
