use axum::{Json, Router, extract::State, routing::get};

use crate::{error::AppResult, fixtures, models::Restaurant, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/restaurants", get(restaurants))
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses((status = 200, description = "Restaurant reference list", body = [Restaurant])),
    tag = "Restaurants"
)]
pub async fn restaurants(State(state): State<AppState>) -> AppResult<Json<Vec<Restaurant>>> {
    let restaurants = fixtures::load_restaurants(&state.data_dir).await?;
    Ok(Json(restaurants))
}
