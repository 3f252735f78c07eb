use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use rand::Rng;

use vendo_core::MachineId;
use vendo_engine::PurchaseRequest;
use vendo_ledger::{HistoryFilter, SortField, SortOrder};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/purchase", post(purchase))
        .route("/purchases", get(list_purchases))
        .route("/balance", get(balance))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.catalog.list_all())).into_response()
}

pub async fn purchase(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
    body: Option<Json<dto::PurchaseRequest>>,
) -> axum::response::Response {
    let Some(Json(body)) = body else {
        return errors::failure(
            StatusCode::BAD_REQUEST,
            "missing or invalid request payload",
            0,
        );
    };

    let machine_id = MachineId::from_caller(
        headers
            .get("x-machine-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    );

    let request = PurchaseRequest {
        item_id: body.product_id,
        quantity: body.quantity,
    };

    match services.engine.purchase(request, machine_id).await {
        Ok(outcome) => {
            (StatusCode::OK, Json(dto::PurchaseResponse::committed(outcome))).into_response()
        }
        Err(err) => errors::purchase_error_to_response(err),
    }
}

pub async fn list_purchases(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::HistoryParams>,
) -> axum::response::Response {
    let filter = HistoryFilter {
        search_term: params.search_term,
        machine_id: params.machine_id,
        hours: params.hours,
        sort_field: SortField::parse(params.sort_field.as_deref()),
        sort_order: SortOrder::parse(params.sort_order.as_deref()),
    };

    // Empty history is a 200 with an empty array, never an error.
    (StatusCode::OK, Json(services.history.query(Some(&filter)))).into_response()
}

/// Balance-simulation stub: pseudo-random value in [1.00, 10.00), rounded to
/// two decimals. The purchase path consumes nothing from it.
pub async fn balance() -> axum::response::Response {
    let raw: f64 = rand::thread_rng().gen_range(1.0..10.0);
    let rounded = (raw * 100.0).round() / 100.0;
    (StatusCode::OK, Json(serde_json::json!({ "balance": rounded }))).into_response()
}
