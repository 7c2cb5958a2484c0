use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    fixtures,
    models::{InvalidOrderReasonCode, Order, OrderStatus},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    // The same /orders/{..} segment carries either a date (listing filter) or
    // an order number (lookups); the router needs one shared parameter name.
    Router::new()
        .route("/orders", get(orders))
        .route("/orders/{orderRef}", get(orders_for_date))
        .route("/ordersWithOutcome", get(orders_with_outcome))
        .route("/ordersWithOutcome/{orderDate}", get(orders_with_outcome_for_date))
        .route("/orders/{orderRef}/details", get(order_details))
        .route("/orders/{orderRef}/status", get(order_status))
        .route(
            "/orders/{orderRef}/isOrderOutcomeValid/{statusToCheck}",
            get(is_order_outcome_valid),
        )
}

/// All orders with the outcome masked: the downstream exercise is to decide
/// validity, so the recorded result is withheld here.
#[utoipa::path(
    get,
    path = "/orders",
    responses((status = 200, description = "All orders, outcome masked", body = [Order])),
    tag = "Orders"
)]
pub async fn orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    let mut orders = fixtures::load_orders(&state.data_dir).await?;
    mask_outcome(&mut orders);
    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/orders/{orderRef}",
    params(("orderRef" = String, Path, description = "Exact order date, YYYY-MM-DD")),
    responses(
        (status = 200, description = "Orders for the date, outcome masked", body = [Order]),
        (status = 400, description = "Unparsable date"),
    ),
    tag = "Orders"
)]
pub async fn orders_for_date(
    State(state): State<AppState>,
    Path(order_date): Path<String>,
) -> AppResult<Json<Vec<Order>>> {
    let date = parse_order_date(&order_date)?;
    let mut orders = fixtures::load_orders(&state.data_dir).await?;
    orders.retain(|o| o.order_date == date);
    mask_outcome(&mut orders);
    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/ordersWithOutcome",
    responses((status = 200, description = "All orders with recorded outcome", body = [Order])),
    tag = "Orders"
)]
pub async fn orders_with_outcome(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    let orders = fixtures::load_orders(&state.data_dir).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/ordersWithOutcome/{orderDate}",
    params(("orderDate" = String, Path, description = "Exact order date, YYYY-MM-DD")),
    responses(
        (status = 200, description = "Orders for the date with recorded outcome", body = [Order]),
        (status = 400, description = "Unparsable date"),
    ),
    tag = "Orders"
)]
pub async fn orders_with_outcome_for_date(
    State(state): State<AppState>,
    Path(order_date): Path<String>,
) -> AppResult<Json<Vec<Order>>> {
    let date = parse_order_date(&order_date)?;
    let mut orders = fixtures::load_orders(&state.data_dir).await?;
    orders.retain(|o| o.order_date == date);
    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/orders/{orderRef}/details",
    params(("orderRef" = String, Path, description = "8-hex-digit order number")),
    responses(
        (status = 200, description = "Full order", body = Order),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn order_details(
    State(state): State<AppState>,
    Path(order_no): Path<String>,
) -> AppResult<Json<Order>> {
    let orders = fixtures::load_orders(&state.data_dir).await?;
    let order = find_order(orders, &order_no)?;
    Ok(Json(order))
}

#[utoipa::path(
    get,
    path = "/orders/{orderRef}/status",
    params(("orderRef" = String, Path, description = "8-hex-digit order number")),
    responses(
        (status = 200, description = "Recorded order status", body = OrderStatus),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn order_status(
    State(state): State<AppState>,
    Path(order_no): Path<String>,
) -> AppResult<Json<OrderStatus>> {
    let orders = fixtures::load_orders(&state.data_dir).await?;
    let order = find_order(orders, &order_no)?;
    Ok(Json(order.order_status))
}

/// False for an unknown order number rather than a 404, so graders can probe
/// blindly.
#[utoipa::path(
    get,
    path = "/orders/{orderRef}/isOrderOutcomeValid/{statusToCheck}",
    params(
        ("orderRef" = String, Path, description = "8-hex-digit order number"),
        ("statusToCheck" = OrderStatus, Path, description = "Status to compare against"),
    ),
    responses((status = 200, description = "Whether the recorded status matches", body = bool)),
    tag = "Orders"
)]
pub async fn is_order_outcome_valid(
    State(state): State<AppState>,
    Path((order_no, status_to_check)): Path<(String, OrderStatus)>,
) -> AppResult<Json<bool>> {
    let orders = fixtures::load_orders(&state.data_dir).await?;
    let matches = orders
        .iter()
        .any(|o| o.order_no == order_no && o.order_status == status_to_check);
    Ok(Json(matches))
}

fn mask_outcome(orders: &mut [Order]) {
    for order in orders {
        order.order_status = OrderStatus::Undefined;
        order.invalid_order_reason_code = InvalidOrderReasonCode::NoError;
    }
}

fn parse_order_date(raw: &str) -> AppResult<NaiveDate> {
    raw.parse::<NaiveDate>()
        .map_err(|_| AppError::BadRequest(format!("invalid order date: {raw}")))
}

fn find_order(orders: Vec<Order>, order_no: &str) -> AppResult<Order> {
    match orders.into_iter().find(|o| o.order_no == order_no) {
        Some(order) => Ok(order),
        None => Err(AppError::NotFound),
    }
}
