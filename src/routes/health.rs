use axum::{Json, Router, extract::Path, routing::get};

use crate::{models::TestItem, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/isAlive", get(is_alive))
        .route("/test", get(test_echo))
        .route("/test/{input}", get(test_echo_with_input))
}

#[utoipa::path(
    get,
    path = "/isAlive",
    responses((status = 200, description = "Always true", body = bool)),
    tag = "Service"
)]
pub async fn is_alive() -> Json<bool> {
    Json(true)
}

#[utoipa::path(
    get,
    path = "/test",
    responses((status = 200, description = "Echo greeting", body = TestItem)),
    tag = "Service"
)]
pub async fn test_echo() -> Json<TestItem> {
    Json(greeting(None))
}

#[utoipa::path(
    get,
    path = "/test/{input}",
    params(("input" = String, Path, description = "Value to echo back")),
    responses((status = 200, description = "Echo greeting", body = TestItem)),
    tag = "Service"
)]
pub async fn test_echo_with_input(Path(input): Path<String>) -> Json<TestItem> {
    Json(greeting(Some(input)))
}

fn greeting(input: Option<String>) -> TestItem {
    TestItem {
        greeting: format!(
            "Hello from the delivery data service. Your provided value was: {}",
            input.as_deref().unwrap_or("not provided")
        ),
    }
}
