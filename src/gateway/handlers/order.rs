//! Order handlers (place, retrieve, invoice)

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::core_types::OrderId;
use crate::order::{InvoiceView, OrderView};

use super::super::state::AppState;
use super::super::types::{ApiPath, ApiResult, CreateOrderRequest, ValidatedJson};

/// Place an order
///
/// POST /orders
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created, body is the new order id", body = i64),
        (status = 400, description = "Invalid parameters"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateOrderRequest>,
) -> ApiResult<OrderId> {
    tracing::debug!("Create Order request: {:?}", req);

    let order_id = state
        .orders
        .create_order(req.product_name, req.unit_price.inner(), req.quantity)
        .await?;

    Ok((StatusCode::CREATED, Json(order_id)))
}

/// Retrieve an order
///
/// GET /orders/{order_id}
#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    params(
        ("order_id" = i64, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Order found", body = OrderView),
        (status = 400, description = "Order id is not a number"),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    ApiPath(order_id): ApiPath<OrderId>,
) -> ApiResult<OrderView> {
    let view = state.orders.get_order(order_id).await?;
    Ok((StatusCode::OK, Json(view)))
}

/// Invoice amount of an order
///
/// GET /orders/{order_id}/invoice
#[utoipa::path(
    get,
    path = "/orders/{order_id}/invoice",
    params(
        ("order_id" = i64, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Invoice amount", body = InvoiceView),
        (status = 400, description = "Order id is not a number"),
        (status = 404, description = "Order not found"),
        (status = 422, description = "Amount overflows the decimal range")
    ),
    tag = "Orders"
)]
pub async fn get_invoice(
    State(state): State<Arc<AppState>>,
    ApiPath(order_id): ApiPath<OrderId>,
) -> ApiResult<InvoiceView> {
    let amount = state.orders.get_invoice_amount(order_id).await?;
    Ok((StatusCode::OK, Json(InvoiceView { order_id, amount })))
}
