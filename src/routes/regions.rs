use axum::{Json, Router, extract::State, routing::get};

use crate::{error::AppResult, fixtures, models::NamedRegion, state::AppState};

pub fn router() -> Router<AppState> {
    // Lowercase aliases kept for older consumers.
    Router::new()
        .route("/centralArea", get(central_area))
        .route("/centralarea", get(central_area))
        .route("/noFlyZones", get(no_fly_zones))
        .route("/noflyzones", get(no_fly_zones))
}

#[utoipa::path(
    get,
    path = "/centralArea",
    responses((status = 200, description = "Central-area polygon", body = NamedRegion)),
    tag = "Regions"
)]
pub async fn central_area(State(state): State<AppState>) -> AppResult<Json<NamedRegion>> {
    let region = fixtures::load_central_area(&state.data_dir).await?;
    Ok(Json(region))
}

#[utoipa::path(
    get,
    path = "/noFlyZones",
    responses((status = 200, description = "No-fly-zone polygons", body = [NamedRegion])),
    tag = "Regions"
)]
pub async fn no_fly_zones(State(state): State<AppState>) -> AppResult<Json<Vec<NamedRegion>>> {
    let regions = fixtures::load_no_fly_zones(&state.data_dir).await?;
    Ok(Json(regions))
}
