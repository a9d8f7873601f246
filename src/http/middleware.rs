//! Request tracking middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::observability::metrics;

/// Record count and latency metrics for every completed request.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let route = req.uri().path().to_string();

    let response = next.run(req).await;

    metrics::record_request(&method, &route, response.status().as_u16(), start);
    response
}
