//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → environment overrides (VERCEL_* variables win)
//!     → AppConfig (validated, immutable)
//!     → shared with all subsystems at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so the service runs with no config file at all
//! - Validation separates syntactic (serde) from semantic checks
//! - Environment wins over file: the hosting platform owns deployment identity

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{apply_env_overrides, load_config, ConfigError};
pub use schema::{AppConfig, DeploymentConfig, ListenerConfig, ObservabilityConfig, TimeoutConfig};
