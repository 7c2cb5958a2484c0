use axum::Router;

use crate::state::AppState;

pub mod doc;
pub mod health;
pub mod orders;
pub mod regions;
pub mod restaurants;

// Build the API router without binding state; it will be provided at the top level.
// Everything hangs off the root, the paths are a fixed contract for consumers.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(orders::router())
        .merge(restaurants::router())
        .merge(regions::router())
        .merge(health::router())
}
