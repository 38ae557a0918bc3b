//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: repository/service wiring shared by all handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `errors.rs`: JSON response helpers and error mapping

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: AppServices) -> Router {
    let api = routes::router().layer(Extension(Arc::new(services)));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(api)
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::request_logging)))
}
