use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use axum_delivery_api::{
    config::AppConfig,
    fixtures,
    generator::{self, GeneratorConfig},
};

/// Offline fixture generator: reads the restaurant reference data, fabricates
/// the order corpus and writes orders.json into the data directory. An
/// optional positional argument overrides the start date (YYYY-MM-DD).
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    println!("sample order data generator");

    let config = AppConfig::from_env()?;

    let start_date = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<NaiveDate>()?,
        None => GeneratorConfig::default_start_date(),
    };
    let generator_config = GeneratorConfig::with_start_date(start_date);

    // Seedable for reproducible corpora; entropy otherwise.
    let mut rng = match std::env::var("GENERATOR_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
    {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let restaurants = fixtures::load_restaurants(&config.data_dir).await?;
    let orders = generator::generate(&restaurants, &generator_config, &mut rng)?;
    fixtures::write_orders(&config.data_dir, &orders).await?;

    println!(
        "Wrote {} orders for {} days from {} to {}",
        orders.len(),
        generator_config.days,
        generator_config.start_date,
        config.data_dir.join(fixtures::ORDERS_FILE).display()
    );
    Ok(())
}
