//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the demo
//! service. All types derive Serde traits for deserialization from config
//! files, and every field has a default so a minimal (or absent) config
//! file works.

use serde::{Deserialize, Serialize};

/// Root configuration for the demo service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Deployment identity settings (skew protection, region).
    pub deployment: DeploymentConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Deployment identity configuration.
///
/// These values seed the process-wide `DeploymentIdentity`. On a hosting
/// platform they come from the environment (`VERCEL_*` variables), which
/// takes precedence over the file; the file form exists for local
/// development.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DeploymentConfig {
    /// Enable skew protection headers.
    pub skew_protection_enabled: bool,

    /// Opaque identifier for the current deployment/build.
    pub deployment_id: Option<String>,

    /// Region this instance serves from.
    pub region: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_allow_empty_config() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(!config.deployment.skew_protection_enabled);
        assert_eq!(config.deployment.deployment_id, None);
    }

    #[test]
    fn test_partial_config_parses() {
        let config: AppConfig = toml::from_str(
            r#"
            [deployment]
            skew_protection_enabled = true
            deployment_id = "dep-42"
            region = "fra1"
            "#,
        )
        .unwrap();
        assert!(config.deployment.skew_protection_enabled);
        assert_eq!(config.deployment.deployment_id.as_deref(), Some("dep-42"));
        assert_eq!(config.deployment.region.as_deref(), Some("fra1"));
        // Untouched sections keep defaults
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }
}
