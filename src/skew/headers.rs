//! Response header augmentation.
//!
//! # Responsibilities
//! - Tag responses with the deployment identifier header
//! - Leave every other header entry untouched
//!
//! # Design Decisions
//! - Overwrite, never append: repeated application is idempotent
//! - Incomplete configuration is a silent no-op, not an error
//! - The header is a plain hint; no signing or verification

use http::{HeaderMap, HeaderName, HeaderValue};

use crate::skew::identity::DeploymentIdentity;

/// Response header carrying the deployment identifier.
pub const X_DEPLOYMENT_ID: HeaderName = HeaderName::from_static("x-deployment-id");

/// Add the skew protection header to a header map in place.
///
/// Sets `x-deployment-id` to the configured deployment identifier iff
/// protection is enabled AND an identifier is present. Otherwise the map is
/// left unmodified. Any prior value under that name is overwritten.
pub fn add_skew_protection_headers(identity: &DeploymentIdentity, headers: &mut HeaderMap) {
    if !identity.is_active() {
        return;
    }
    let Some(id) = identity.deployment_id() else {
        return;
    };
    match HeaderValue::from_str(id) {
        Ok(value) => {
            headers.insert(X_DEPLOYMENT_ID, value);
        }
        Err(_) => {
            // Identifier contains bytes not valid in a header value.
            // Treated the same as an absent id.
            tracing::debug!(deployment_id = %id, "Deployment id is not a valid header value");
        }
    }
}

/// Take a header map (or start from an empty one), apply skew protection,
/// and hand it back.
///
/// The caller transfers ownership in and receives it back out, so parent
/// scope headers can be folded through without aliasing.
pub fn with_skew_protection(identity: &DeploymentIdentity, mut headers: HeaderMap) -> HeaderMap {
    add_skew_protection_headers(identity, &mut headers);
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("text/plain"));
        headers.insert("cache-control", HeaderValue::from_static("no-cache"));
        headers
    }

    #[test]
    fn test_disabled_flag_leaves_headers_unchanged() {
        let identity = DeploymentIdentity::new(false, Some("dep-42".into()));
        let before = sample_headers();
        let mut headers = before.clone();
        add_skew_protection_headers(&identity, &mut headers);
        assert_eq!(headers, before);
    }

    #[test]
    fn test_missing_id_leaves_headers_unchanged() {
        let identity = DeploymentIdentity::new(true, None);
        let before = sample_headers();
        let mut headers = before.clone();
        add_skew_protection_headers(&identity, &mut headers);
        assert_eq!(headers, before);

        let identity = DeploymentIdentity::new(true, Some(String::new()));
        add_skew_protection_headers(&identity, &mut headers);
        assert_eq!(headers, before);
    }

    #[test]
    fn test_enabled_sets_exactly_one_entry() {
        let identity = DeploymentIdentity::new(true, Some("abc123".into()));
        let mut headers = sample_headers();
        add_skew_protection_headers(&identity, &mut headers);

        assert_eq!(headers.get_all(X_DEPLOYMENT_ID).iter().count(), 1);
        assert_eq!(headers.get(X_DEPLOYMENT_ID).unwrap(), "abc123");
        // Prior entries untouched
        assert_eq!(headers.get("content-type").unwrap(), "text/plain");
        assert_eq!(headers.get("cache-control").unwrap(), "no-cache");
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn test_idempotent_application() {
        let identity = DeploymentIdentity::new(true, Some("dep-42".into()));
        let mut once = sample_headers();
        add_skew_protection_headers(&identity, &mut once);

        let mut twice = sample_headers();
        add_skew_protection_headers(&identity, &mut twice);
        add_skew_protection_headers(&identity, &mut twice);

        assert_eq!(once, twice);
        assert_eq!(twice.get_all(X_DEPLOYMENT_ID).iter().count(), 1);
    }

    #[test]
    fn test_empty_map_gains_single_header() {
        let identity = DeploymentIdentity::new(true, Some("dep-42".into()));
        let headers = with_skew_protection(&identity, HeaderMap::new());
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(X_DEPLOYMENT_ID).unwrap(), "dep-42");
    }

    #[test]
    fn test_stale_value_overwritten_not_duplicated() {
        let identity = DeploymentIdentity::new(true, Some("dep-42".into()));
        let mut headers = HeaderMap::new();
        headers.insert(X_DEPLOYMENT_ID, HeaderValue::from_static("stale"));
        add_skew_protection_headers(&identity, &mut headers);

        assert_eq!(headers.get_all(X_DEPLOYMENT_ID).iter().count(), 1);
        assert_eq!(headers.get(X_DEPLOYMENT_ID).unwrap(), "dep-42");
    }

    #[test]
    fn test_invalid_header_value_is_noop() {
        let identity = DeploymentIdentity::new(true, Some("dep\n42".into()));
        let mut headers = HeaderMap::new();
        add_skew_protection_headers(&identity, &mut headers);
        assert!(headers.is_empty());
    }
}
