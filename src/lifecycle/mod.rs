//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Ctrl-C or trigger() → broadcast → server stops accepting → drain → exit
//! ```
//!
//! # Design Decisions
//! - One broadcast channel; every long-running task subscribes
//! - Graceful drain is delegated to axum::serve

pub mod shutdown;

pub use shutdown::Shutdown;
