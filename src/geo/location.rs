//! Geolocation extraction from edge request headers.

use http::HeaderMap;

/// Request header with the visitor's country code.
pub const IP_COUNTRY: &str = "x-vercel-ip-country";
/// Request header with the visitor's region within the country.
pub const IP_COUNTRY_REGION: &str = "x-vercel-ip-country-region";
/// Request header with the visitor's city.
pub const IP_CITY: &str = "x-vercel-ip-city";
/// Request header with the visitor's timezone.
pub const IP_TIMEZONE: &str = "x-vercel-ip-timezone";

/// Visitor geolocation as reported by the edge network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geolocation {
    pub country: String,
    pub region: String,
    pub city: String,
    pub timezone: String,
}

impl Geolocation {
    /// Extract geolocation from request headers.
    ///
    /// Headers the edge network did not supply fall back to `"Unknown"`
    /// (timezone falls back to `"UTC"`).
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            country: header_or(headers, IP_COUNTRY, "Unknown"),
            region: header_or(headers, IP_COUNTRY_REGION, "Unknown"),
            city: header_or(headers, IP_CITY, "Unknown"),
            timezone: header_or(headers, IP_TIMEZONE, "UTC"),
        }
    }
}

fn header_or(headers: &HeaderMap, name: &str, fallback: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_extracts_all_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(IP_COUNTRY, HeaderValue::from_static("DE"));
        headers.insert(IP_COUNTRY_REGION, HeaderValue::from_static("BE"));
        headers.insert(IP_CITY, HeaderValue::from_static("Berlin"));
        headers.insert(IP_TIMEZONE, HeaderValue::from_static("Europe/Berlin"));

        let geo = Geolocation::from_headers(&headers);
        assert_eq!(geo.country, "DE");
        assert_eq!(geo.region, "BE");
        assert_eq!(geo.city, "Berlin");
        assert_eq!(geo.timezone, "Europe/Berlin");
    }

    #[test]
    fn test_missing_headers_fall_back() {
        let geo = Geolocation::from_headers(&HeaderMap::new());
        assert_eq!(geo.country, "Unknown");
        assert_eq!(geo.region, "Unknown");
        assert_eq!(geo.city, "Unknown");
        assert_eq!(geo.timezone, "UTC");
    }

    #[test]
    fn test_partial_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(IP_COUNTRY, HeaderValue::from_static("JP"));

        let geo = Geolocation::from_headers(&headers);
        assert_eq!(geo.country, "JP");
        assert_eq!(geo.city, "Unknown");
        assert_eq!(geo.timezone, "UTC");
    }
}
