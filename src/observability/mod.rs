//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging with a request ID on every request span
//! - Metrics are cheap (atomic increments)
//! - The metrics listener is optional and off by default

pub mod logging;
pub mod metrics;

pub use logging::init_tracing;
