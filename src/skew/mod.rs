//! Skew protection subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (VERCEL_* variables)
//!     → identity.rs (read once at startup)
//!     → DeploymentIdentity (immutable for process lifetime)
//!     → shared via Arc to all handlers
//!
//! Per response:
//!     handler builds/inherits a header map
//!     → headers.rs conditionally sets x-deployment-id
//!     → header map returned to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Identity is constructed once at startup and passed explicitly;
//!   business logic never reads ambient environment state
//! - The augmenter is infallible: incomplete configuration is a no-op,
//!   not an error
//! - Set semantics (overwrite), so repeated application is idempotent

pub mod headers;
pub mod identity;

pub use headers::{add_skew_protection_headers, with_skew_protection, X_DEPLOYMENT_ID};
pub use identity::DeploymentIdentity;
