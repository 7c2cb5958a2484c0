use std::path::Path;
use tokio::fs;

use crate::error::AppResult;
use crate::models::{NamedRegion, Order, Restaurant};

pub const ORDERS_FILE: &str = "orders.json";
pub const RESTAURANTS_FILE: &str = "restaurants.json";
pub const CENTRAL_AREA_FILE: &str = "centralarea.json";
pub const NO_FLY_ZONES_FILE: &str = "noflyzones.json";

// The fixture files are the storage layer: every request re-reads them so a
// regenerated orders.json is picked up without a restart.

pub async fn load_orders(data_dir: &Path) -> AppResult<Vec<Order>> {
    let text = fs::read_to_string(data_dir.join(ORDERS_FILE)).await?;
    Ok(serde_json::from_str(&text)?)
}

pub async fn load_restaurants(data_dir: &Path) -> AppResult<Vec<Restaurant>> {
    let text = fs::read_to_string(data_dir.join(RESTAURANTS_FILE)).await?;
    Ok(serde_json::from_str(&text)?)
}

pub async fn load_central_area(data_dir: &Path) -> AppResult<NamedRegion> {
    let text = fs::read_to_string(data_dir.join(CENTRAL_AREA_FILE)).await?;
    Ok(serde_json::from_str(&text)?)
}

pub async fn load_no_fly_zones(data_dir: &Path) -> AppResult<Vec<NamedRegion>> {
    let text = fs::read_to_string(data_dir.join(NO_FLY_ZONES_FILE)).await?;
    Ok(serde_json::from_str(&text)?)
}

pub async fn write_orders(data_dir: &Path, orders: &[Order]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(orders)?;
    fs::write(data_dir.join(ORDERS_FILE), json).await?;
    Ok(())
}
