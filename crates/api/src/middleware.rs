use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};

/// Log method, path, status and latency of every request.
pub async fn request_logging(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let res = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = res.status().as_u16(),
        latency_us = started.elapsed().as_micros() as u64,
        "request handled"
    );
    res
}
