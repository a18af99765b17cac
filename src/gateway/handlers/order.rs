//! Order intake handlers (create, fetch)

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

use crate::models::Order;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, ErrorResponse, validate_order};

/// Create order endpoint
///
/// POST /api/orders
///
/// Validation failures are always 400 with the full message list; the
/// opaque 500 path is reserved for faults the handler did not anticipate.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body(content = String, description = "Order payload JSON", content_type = "application/json"),
    responses(
        (status = 201, description = "Order created", body = Order, content_type = "application/json"),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn create_order(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult<Order> {
    // The body is read raw instead of through Json<T>: an absent body and a
    // malformed one must produce different validation messages, and neither
    // is allowed to surface as a framework rejection.
    let payload = if body.is_empty() {
        None
    } else {
        match serde_json::from_slice::<serde_json::Value>(&body) {
            Ok(value) => Some(value),
            Err(_) => {
                return Err(ApiError::validation(vec![
                    "Request body must be JSON".to_string(),
                ]));
            }
        }
    };

    let canonical = validate_order(payload.as_ref(), state.customer_id_kind)
        .map_err(ApiError::validation)?;

    let order = canonical.into_order(Uuid::new_v4(), Utc::now());
    state.store.put(order.clone());

    tracing::info!(order_id = %order.order_id, total = order.total, "order accepted");

    Ok((StatusCode::CREATED, Json(order)))
}

/// Fetch a stored order by id
///
/// GET /api/orders/{order_id}
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    params(("order_id" = Uuid, Path, description = "Server-assigned order id")),
    responses(
        (status = 200, description = "Order found", body = Order, content_type = "application/json"),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<Uuid>,
) -> ApiResult<Order> {
    match state.store.get(&order_id) {
        Some(order) => Ok((StatusCode::OK, Json(order))),
        None => Err(ApiError::not_found("Order not found")),
    }
}
