use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use catalog_products::ServiceError;

/// Content type of every catalog response.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Body of every error response: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Serialize `body` as JSON with an explicit utf-8 content type.
pub fn json_response<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => with_json_content_type(status, bytes),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize response body");
            let fallback = serde_json::json!({ "error": e.to_string() }).to_string();
            with_json_content_type(StatusCode::INTERNAL_SERVER_ERROR, fallback.into_bytes())
        }
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    json_response(
        status,
        &ErrorBody {
            error: message.into(),
        },
    )
}

/// Map a service failure to a response.
///
/// Seller-not-found and store failures both answer 500 with the error text.
pub fn service_error_to_response(err: ServiceError) -> Response {
    json_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

fn with_json_content_type(status: StatusCode, bytes: Vec<u8>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
        bytes,
    )
        .into_response()
}
