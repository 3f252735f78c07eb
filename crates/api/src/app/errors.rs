use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use vendo_core::PurchaseError;

use crate::app::dto::PurchaseResponse;

/// Failure-to-status mapping, reproduced bit-exact for compatibility:
/// out-of-stock is 500 (as observed in the machine contract), not 409.
pub fn purchase_error_to_response(err: PurchaseError) -> axum::response::Response {
    let message = err.to_string();
    let (status, remaining) = match err {
        PurchaseError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, 0),
        PurchaseError::NotFound => (StatusCode::NOT_FOUND, 0),
        PurchaseError::RateLimited { .. } => (StatusCode::TOO_MANY_REQUESTS, 0),
        PurchaseError::OutOfStock { remaining } => (StatusCode::INTERNAL_SERVER_ERROR, remaining),
        PurchaseError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, 0),
    };
    failure(status, message, remaining)
}

pub fn failure(
    status: StatusCode,
    message: impl Into<String>,
    remaining: u32,
) -> axum::response::Response {
    (status, Json(PurchaseResponse::failed(message, remaining))).into_response()
}
