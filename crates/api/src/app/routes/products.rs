use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};

use catalog_core::SellerId;

use crate::app::errors;
use crate::app::services::AppServices;

pub const SELLER_ID_REQUIRED: &str = "seller_id query param is required";

pub fn router() -> Router {
    Router::new().route("/", get(get_products))
}

/// Raw query pairs in request order; repeated keys are kept.
pub type QueryPairs = Vec<(String, String)>;

/// The first `seller_id` value, if present and non-empty; later duplicates are ignored.
pub fn seller_id_param(pairs: &[(String, String)]) -> Option<SellerId> {
    pairs
        .iter()
        .find(|(key, _)| key == "seller_id")
        .and_then(|(_, value)| SellerId::new(value.as_str()).ok())
}

/// `GET /api/v1/products?seller_id=<id>`: the seller's catalog as a JSON array.
pub async fn get_products(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable products query string");
            return errors::json_error(StatusCode::BAD_REQUEST, SELLER_ID_REQUIRED);
        }
    };

    let Some(seller_id) = seller_id_param(&pairs) else {
        tracing::warn!("products request with missing or empty seller_id");
        return errors::json_error(StatusCode::BAD_REQUEST, SELLER_ID_REQUIRED);
    };

    match services.products.get_all_by_seller(&seller_id).await {
        Ok(products) => errors::json_response(StatusCode::OK, &products),
        Err(e) => {
            tracing::error!(seller_id = %seller_id, error = %e, "failed to list seller products");
            errors::service_error_to_response(e)
        }
    }
}
