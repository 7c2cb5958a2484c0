use chrono::{Datelike, Days, NaiveDate};
use rand::Rng;
use thiserror::Error;

use crate::models::{
    DayOfWeek, InvalidOrderReasonCode, Order, OrderStatus, Pizza, Restaurant,
    VALID_CARD_NUMBER_LENGTH, VALID_CVV_LENGTH,
};

/// How many valid orders to generate per day.
pub const MAX_VALID_ORDERS_PER_DAY: u32 = 50;

/// Default generation window, five 30-day months.
pub const DURATION_IN_DAYS: u32 = 5 * 30;

/// Every reason code that yields a corrupted order. NO_ERROR is excluded, a
/// valid order carries it already.
pub const INVALID_REASONS: [InvalidOrderReasonCode; 8] = [
    InvalidOrderReasonCode::Cvv,
    InvalidOrderReasonCode::CardNumber,
    InvalidOrderReasonCode::Total,
    InvalidOrderReasonCode::ExpiryDate,
    InvalidOrderReasonCode::PizzaNotDefined,
    InvalidOrderReasonCode::MaxPizzaCountExceeded,
    InvalidOrderReasonCode::MultipleRestaurants,
    InvalidOrderReasonCode::RestaurantClosed,
];

const FIRST_NAMES: [&str; 12] = [
    "Alice", "Bruno", "Carla", "Daniel", "Elena", "Fergus", "Grace", "Hamish", "Isla", "Jack",
    "Kirsty", "Lewis",
];

const LAST_NAMES: [&str; 12] = [
    "Anderson", "Brown", "Campbell", "Douglas", "Fraser", "Graham", "Hunter", "MacLeod",
    "Murray", "Reid", "Stewart", "Wallace",
];

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("restaurant reference list is empty")]
    NoRestaurants,

    #[error("need at least two restaurants to corrupt an order across suppliers")]
    NeedTwoRestaurants,

    #[error("restaurant {0} has an empty menu")]
    EmptyMenu(String),

    #[error("restaurant {0} has no opening days")]
    NoOpeningDays(String),

    #[error("no restaurant is closed on {0}")]
    NoClosedRestaurant(DayOfWeek),
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub start_date: NaiveDate,
    pub days: u32,
    pub valid_orders_per_day: u32,
}

impl GeneratorConfig {
    pub fn with_start_date(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            days: DURATION_IN_DAYS,
            valid_orders_per_day: MAX_VALID_ORDERS_PER_DAY,
        }
    }

    pub fn default_start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 9, 1).expect("valid calendar date")
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::with_start_date(Self::default_start_date())
    }
}

/// Round-robin restaurant cursor. Owned by the generation run, so the
/// assignment order is deterministic within a run without any global state.
#[derive(Debug, Default)]
pub struct RestaurantSelector {
    index: usize,
}

impl RestaurantSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next<'a>(&mut self, restaurants: &'a [Restaurant]) -> &'a Restaurant {
        let restaurant = &restaurants[self.index];
        self.index = (self.index + 1) % restaurants.len();
        restaurant
    }
}

/// Generate the full fixture: one corrupted order per reason code per day,
/// followed by the configured number of valid orders per day.
pub fn generate<R: Rng>(
    restaurants: &[Restaurant],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Vec<Order>, GeneratorError> {
    check_preconditions(restaurants, config)?;

    let mut selector = RestaurantSelector::new();
    let mut orders = Vec::new();

    for date in date_range(config) {
        for reason in INVALID_REASONS {
            let mut order = base_order(
                date,
                OrderStatus::Invalid,
                reason,
                &mut selector,
                restaurants,
                rng,
            );
            apply_corruption(&mut order, reason, restaurants, rng)?;
            orders.push(order);
        }
    }

    for date in date_range(config) {
        for _ in 0..config.valid_orders_per_day {
            orders.push(base_order(
                date,
                OrderStatus::Delivered,
                InvalidOrderReasonCode::NoError,
                &mut selector,
                restaurants,
                rng,
            ));
        }
    }

    Ok(orders)
}

/// Validate the reference data up front so a run either produces a complete
/// file or aborts before writing anything.
pub fn check_preconditions(
    restaurants: &[Restaurant],
    config: &GeneratorConfig,
) -> Result<(), GeneratorError> {
    if restaurants.is_empty() {
        return Err(GeneratorError::NoRestaurants);
    }
    if restaurants.len() < 2 {
        return Err(GeneratorError::NeedTwoRestaurants);
    }
    for restaurant in restaurants {
        if restaurant.menu.is_empty() {
            return Err(GeneratorError::EmptyMenu(restaurant.name.clone()));
        }
        if restaurant.opening_days.is_empty() {
            return Err(GeneratorError::NoOpeningDays(restaurant.name.clone()));
        }
    }

    // Consecutive dates, so every weekday the range touches shows up within
    // its first seven days.
    for date in date_range(config).take(7) {
        let day = DayOfWeek::from(date.weekday());
        if restaurants.iter().all(|r| r.is_open_on(day)) {
            return Err(GeneratorError::NoClosedRestaurant(day));
        }
    }

    Ok(())
}

/// Synthesize a syntactically valid order for the given date: fresh order
/// number, plausible card data, the next restaurant's full menu and the
/// correct total.
pub fn base_order<R: Rng>(
    date: NaiveDate,
    status: OrderStatus,
    reason: InvalidOrderReasonCode,
    selector: &mut RestaurantSelector,
    restaurants: &[Restaurant],
    rng: &mut R,
) -> Order {
    let restaurant = selector.next(restaurants);

    let mut order = Order {
        order_no: format!("{:08X}", rng.gen_range(1..i32::MAX)),
        order_date: date,
        customer: format!(
            "{} {}",
            FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())],
            LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())]
        ),
        credit_card_number: card_number(rng),
        credit_card_expiry: format!(
            "{:02}/{:02}",
            rng.gen_range(1..=12),
            rng.gen_range(24..=28)
        ),
        cvv: digits(rng, VALID_CVV_LENGTH),
        price_total_in_pence: 0,
        pizzas_in_order: restaurant.menu.clone(),
        order_status: status,
        invalid_order_reason_code: reason,
    };
    order.price_total_in_pence = order.computed_total_in_pence();
    order
}

/// Corruption table: exactly one self-contained mutation per reason code.
pub fn apply_corruption<R: Rng>(
    order: &mut Order,
    reason: InvalidOrderReasonCode,
    restaurants: &[Restaurant],
    rng: &mut R,
) -> Result<(), GeneratorError> {
    match reason {
        InvalidOrderReasonCode::Cvv => corrupt_cvv(order, rng),
        InvalidOrderReasonCode::CardNumber => corrupt_card_number(order, rng),
        InvalidOrderReasonCode::Total => corrupt_total(order, rng),
        InvalidOrderReasonCode::ExpiryDate => corrupt_expiry_date(order, rng),
        InvalidOrderReasonCode::PizzaNotDefined => corrupt_pizza_not_defined(order, rng),
        InvalidOrderReasonCode::MaxPizzaCountExceeded => corrupt_max_pizza_count(order, rng),
        InvalidOrderReasonCode::MultipleRestaurants => {
            corrupt_multiple_restaurants(order, restaurants)
        }
        InvalidOrderReasonCode::RestaurantClosed => {
            corrupt_restaurant_closed(order, restaurants)?
        }
        InvalidOrderReasonCode::NoError => {}
    }
    Ok(())
}

/// A CVV of any length but the valid three digits.
fn corrupt_cvv<R: Rng>(order: &mut Order, rng: &mut R) {
    let mut len = rng.gen_range(1..8);
    if len == VALID_CVV_LENGTH {
        len = 4;
    }
    order.cvv = digits(rng, len);
}

/// A card number shorter than the valid sixteen digits.
fn corrupt_card_number<R: Rng>(order: &mut Order, rng: &mut R) {
    let len = rng.gen_range(1..VALID_CARD_NUMBER_LENGTH);
    order.credit_card_number = digits(rng, len);
}

/// Shift the total by a non-zero delta.
fn corrupt_total<R: Rng>(order: &mut Order, rng: &mut R) {
    let mut delta = rng.gen_range(-100..1000);
    if delta == 0 {
        delta = 1;
    }
    order.price_total_in_pence += delta;
}

/// An expiry that is chronologically past or has a month outside 01-12.
fn corrupt_expiry_date<R: Rng>(order: &mut Order, rng: &mut R) {
    order.credit_card_expiry = format!(
        "{:02}/{:02}",
        rng.gen_range(1..20),
        rng.gen_range(2..19)
    );
}

/// Append a pizza no restaurant sells. The stale total is intentional, the
/// reason under test is the unknown pizza.
fn corrupt_pizza_not_defined<R: Rng>(order: &mut Order, rng: &mut R) {
    order.pizzas_in_order.push(synthetic_pizza("Pizza-Surprise", rng));
}

/// Push the item count past the platform maximum and keep the total honest.
fn corrupt_max_pizza_count<R: Rng>(order: &mut Order, rng: &mut R) {
    order.pizzas_in_order.push(synthetic_pizza("Pizza-Surprise", rng));
    order.pizzas_in_order.push(synthetic_pizza("Pizza-Extra2", rng));
    order.pizzas_in_order.push(synthetic_pizza("Pizza-Extra3", rng));
    order.pizzas_in_order.push(synthetic_pizza("Pizza-Extra4", rng));
    order.price_total_in_pence = order.computed_total_in_pence();
}

/// Mix in the first menu item of a different supplier.
fn corrupt_multiple_restaurants(order: &mut Order, restaurants: &[Restaurant]) {
    let first_pizza = &order.pizzas_in_order[0].name;
    let owner = restaurants
        .iter()
        .position(|r| r.menu[0].name == *first_pizza)
        .unwrap_or(0);
    let other = if owner == 0 {
        &restaurants[1]
    } else {
        &restaurants[0]
    };

    order.pizzas_in_order.push(other.menu[0].clone());
    order.price_total_in_pence = order.computed_total_in_pence();
}

/// Replace the items with a single pizza from a restaurant that is closed on
/// the order date.
fn corrupt_restaurant_closed(
    order: &mut Order,
    restaurants: &[Restaurant],
) -> Result<(), GeneratorError> {
    let day = DayOfWeek::from(order.order_date.weekday());
    let closed = restaurants
        .iter()
        .find(|r| !r.is_open_on(day))
        .ok_or(GeneratorError::NoClosedRestaurant(day))?;

    order.pizzas_in_order = vec![closed.menu[0].clone()];
    order.price_total_in_pence = order.computed_total_in_pence();
    Ok(())
}

fn date_range(config: &GeneratorConfig) -> impl Iterator<Item = NaiveDate> {
    let start = config.start_date;
    (0..config.days).map(move |offset| start + Days::new(u64::from(offset)))
}

fn synthetic_pizza<R: Rng>(name: &str, rng: &mut R) -> Pizza {
    Pizza {
        name: name.to_string(),
        price_in_pence: rng.gen_range(100..2500),
    }
}

fn digits<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

fn card_number<R: Rng>(rng: &mut R) -> String {
    // Leading 4 or 5, the networks the platform accepts.
    let mut number = String::with_capacity(VALID_CARD_NUMBER_LENGTH);
    number.push(if rng.gen_bool(0.5) { '4' } else { '5' });
    number.push_str(&digits(rng, VALID_CARD_NUMBER_LENGTH - 1));
    number
}
