//! Deployment identity configuration.

/// Environment variable enabling skew protection (truthy value is `"1"`).
pub const SKEW_PROTECTION_ENABLED_VAR: &str = "VERCEL_SKEW_PROTECTION_ENABLED";

/// Environment variable carrying the opaque deployment identifier.
pub const DEPLOYMENT_ID_VAR: &str = "VERCEL_DEPLOYMENT_ID";

/// Serializes tests that mutate the process environment.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Process-wide deployment identity.
///
/// Read-only after construction. Built once at startup (from the environment
/// or from config) and shared by reference with every handler.
#[derive(Debug, Clone, Default)]
pub struct DeploymentIdentity {
    protection_enabled: bool,
    deployment_id: Option<String>,
}

impl DeploymentIdentity {
    /// Create an identity from explicit values.
    ///
    /// An empty deployment id is normalized to absent.
    pub fn new(protection_enabled: bool, deployment_id: Option<String>) -> Self {
        let deployment_id = deployment_id.filter(|id| !id.is_empty());
        Self {
            protection_enabled,
            deployment_id,
        }
    }

    /// Read the identity from the process environment.
    ///
    /// Absence of either variable disables the feature; never an error.
    pub fn from_env() -> Self {
        let enabled = std::env::var(SKEW_PROTECTION_ENABLED_VAR)
            .map(|v| v == "1")
            .unwrap_or(false);
        let id = std::env::var(DEPLOYMENT_ID_VAR).ok();
        Self::new(enabled, id)
    }

    /// Whether the skew protection flag is set for this process.
    pub fn protection_enabled(&self) -> bool {
        self.protection_enabled
    }

    /// The deployment identifier, if one was supplied.
    pub fn deployment_id(&self) -> Option<&str> {
        self.deployment_id.as_deref()
    }

    /// True when the feature is fully configured (flag on AND id present).
    pub fn is_active(&self) -> bool {
        self.protection_enabled && self.deployment_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_id_normalized_to_absent() {
        let identity = DeploymentIdentity::new(true, Some(String::new()));
        assert_eq!(identity.deployment_id(), None);
        assert!(!identity.is_active());
    }

    #[test]
    fn test_active_requires_both_settings() {
        assert!(!DeploymentIdentity::new(false, Some("dep-42".into())).is_active());
        assert!(!DeploymentIdentity::new(true, None).is_active());
        assert!(DeploymentIdentity::new(true, Some("dep-42".into())).is_active());
    }

    #[test]
    fn test_default_identity_is_inactive() {
        let identity = DeploymentIdentity::default();
        assert!(!identity.protection_enabled());
        assert_eq!(identity.deployment_id(), None);
    }

    #[test]
    fn test_from_env() {
        let _guard = ENV_LOCK.lock().unwrap();

        std::env::set_var(SKEW_PROTECTION_ENABLED_VAR, "1");
        std::env::set_var(DEPLOYMENT_ID_VAR, "dep-env");
        let identity = DeploymentIdentity::from_env();
        assert!(identity.is_active());
        assert_eq!(identity.deployment_id(), Some("dep-env"));

        // Any value other than "1" is not truthy
        std::env::set_var(SKEW_PROTECTION_ENABLED_VAR, "true");
        assert!(!DeploymentIdentity::from_env().protection_enabled());

        std::env::remove_var(SKEW_PROTECTION_ENABLED_VAR);
        std::env::remove_var(DEPLOYMENT_ID_VAR);
        assert!(!DeploymentIdentity::from_env().is_active());
    }
}
