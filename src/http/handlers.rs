//! Route handlers.
//!
//! Each handler builds its own response header map, folds the skew
//! protection header through it, and returns the map alongside the body.
//! Header ownership is explicit: a handler either creates a fresh map or
//! clones the app-scope base headers, mutates its copy, and returns it.

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

use crate::geo::{CountryContent, Geolocation};
use crate::http::server::AppState;
use crate::skew::{add_skew_protection_headers, with_skew_protection, X_DEPLOYMENT_ID};

/// Handles `GET /`: a JSON greeting with skew protection headers.
///
/// Starts from an empty header map (the fresh-collection convention).
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let headers = with_skew_protection(&state.identity, HeaderMap::new());

    (headers, Json(json!({ "message": "Hello from the edge demo!" })))
}

/// Handles `GET /regional-demo`: a server-rendered page with visitor geolocation.
///
/// Response headers inherit the app-scope base headers (the parent-scope
/// convention): the handler takes a copy, folds skew protection through
/// it, and returns the merged map.
pub async fn regional_demo(
    State(state): State<AppState>,
    request_headers: HeaderMap,
) -> impl IntoResponse {
    let geo = Geolocation::from_headers(&request_headers);
    let content = CountryContent::for_country(&geo.country);

    tracing::debug!(
        country = %geo.country,
        city = %geo.city,
        region = %state.region,
        "Rendering regional demo page"
    );

    let page = render_regional_page(&geo, &content, &state.region);

    let headers = with_skew_protection(&state.identity, state.base_headers.clone());
    (headers, Html(page))
}

/// Handles `GET /api/skew-test`: JSON diagnostics for the skew protection feature.
pub async fn skew_test(State(state): State<AppState>) -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    add_skew_protection_headers(&state.identity, &mut headers);
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));

    let observed = headers
        .get(X_DEPLOYMENT_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("not-set")
        .to_string();

    let body = json!({
        "message": "Skew protection test endpoint",
        "timestamp": Utc::now().to_rfc3339(),
        "deployment": {
            "id": state.identity.deployment_id().unwrap_or("local-dev"),
            "region": state.region,
            "skew_protection_enabled": state.identity.protection_enabled(),
        },
        "headers": {
            "x-deployment-id": observed,
        },
    });

    (headers, Json(body))
}

/// Handles `GET /health`: liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

fn render_regional_page(geo: &Geolocation, content: &CountryContent, region: &str) -> String {
    let timestamp = Utc::now().to_rfc3339();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Regional Demo</title>
  <meta name="description" content="Demo of regional edge deployment capabilities">
</head>
<body>
  <h1>Regional Demo</h1>
  <section>
    <p class="flag">{flag}</p>
    <h2>{greeting}</h2>
    <p>Served from the edge, closest to you!</p>
  </section>
  <section>
    <h3>Your Location</h3>
    <ul>
      <li>Country: {country}</li>
      <li>Region: {geo_region}</li>
      <li>City: {city}</li>
      <li>Timezone: {timezone}</li>
    </ul>
  </section>
  <section>
    <h3>Deployment Info</h3>
    <ul>
      <li>Served from: {region}</li>
      <li>Currency: {currency}</li>
      <li>Rendered at: {timestamp}</li>
    </ul>
  </section>
</body>
</html>
"#,
        flag = content.flag,
        greeting = content.greeting,
        country = geo.country,
        geo_region = geo.region,
        city = geo.city,
        timezone = geo.timezone,
        region = region,
        currency = content.currency,
        timestamp = timestamp,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_page_contains_location_and_greeting() {
        let mut headers = HeaderMap::new();
        headers.insert("x-vercel-ip-country", HeaderValue::from_static("FR"));
        headers.insert("x-vercel-ip-city", HeaderValue::from_static("Paris"));

        let geo = Geolocation::from_headers(&headers);
        let content = CountryContent::for_country(&geo.country);
        let page = render_regional_page(&geo, &content, "cdg1");

        assert!(page.contains("Bonjour de France!"));
        assert!(page.contains("City: Paris"));
        assert!(page.contains("Served from: cdg1"));
        assert!(page.contains("Currency: EUR"));
    }
}
