//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::skew::identity::{DEPLOYMENT_ID_VAR, SKEW_PROTECTION_ENABLED_VAR};

/// Environment variable naming the region this instance serves from.
pub const REGION_VAR: &str = "VERCEL_REGION";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Fold platform environment variables into the deployment section.
///
/// The hosting platform supplies deployment identity through the
/// environment; when present, those values win over the file. Called once
/// at startup, before the identity is frozen.
pub fn apply_env_overrides(mut config: AppConfig) -> AppConfig {
    if let Ok(flag) = std::env::var(SKEW_PROTECTION_ENABLED_VAR) {
        config.deployment.skew_protection_enabled = flag == "1";
    }
    if let Ok(id) = std::env::var(DEPLOYMENT_ID_VAR) {
        config.deployment.deployment_id = Some(id);
    }
    if let Ok(region) = std::env::var(REGION_VAR) {
        config.deployment.region = Some(region);
    }
    config
}
