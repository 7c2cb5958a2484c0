use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;

use axum_delivery_api::generator::{
    self, GeneratorConfig, GeneratorError, INVALID_REASONS, RestaurantSelector,
};
use axum_delivery_api::models::{
    DayOfWeek, InvalidOrderReasonCode, LngLat, MAX_PIZZAS_PER_ORDER, Order, OrderStatus, Pizza,
    Restaurant,
};

// A Monday. The second restaurant is closed that day, the first is open.
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
}

fn restaurant(name: &str, pizza: &str, price: i64, open: &[DayOfWeek]) -> Restaurant {
    Restaurant {
        name: name.to_string(),
        location: LngLat {
            lng: -3.19,
            lat: 55.94,
        },
        opening_days: open.to_vec(),
        menu: vec![Pizza {
            name: pizza.to_string(),
            price_in_pence: price,
        }],
    }
}

fn two_restaurants() -> Vec<Restaurant> {
    vec![
        restaurant("Hilltop", "Hilltop Special", 1100, &[DayOfWeek::Monday]),
        restaurant("Quayside", "Quayside Classic", 900, &[DayOfWeek::Tuesday]),
    ]
}

fn one_day_config() -> GeneratorConfig {
    GeneratorConfig {
        start_date: monday(),
        days: 1,
        valid_orders_per_day: 5,
    }
}

#[test]
fn one_day_run_produces_expected_counts_and_invariants() {
    let restaurants = two_restaurants();
    let mut rng = StdRng::seed_from_u64(42);
    let orders = generator::generate(&restaurants, &one_day_config(), &mut rng).unwrap();

    assert_eq!(orders.len(), INVALID_REASONS.len() + 5);

    let invalid: Vec<&Order> = orders
        .iter()
        .filter(|o| o.order_status == OrderStatus::Invalid)
        .collect();
    assert_eq!(invalid.len(), INVALID_REASONS.len());

    // one order per reason code
    let reasons: HashSet<_> = invalid
        .iter()
        .map(|o| o.invalid_order_reason_code)
        .collect();
    assert_eq!(reasons.len(), INVALID_REASONS.len());

    for order in &invalid {
        assert_eq!(order.order_date, monday());
        check_corruption(order, &restaurants);
    }

    for order in orders.iter().filter(|o| o.order_status == OrderStatus::Delivered) {
        assert_eq!(
            order.invalid_order_reason_code,
            InvalidOrderReasonCode::NoError
        );
        assert_eq!(order.price_total_in_pence, order.computed_total_in_pence());
        assert!(order.pizzas_in_order.len() <= MAX_PIZZAS_PER_ORDER);
    }
}

fn check_corruption(order: &Order, restaurants: &[Restaurant]) {
    match order.invalid_order_reason_code {
        InvalidOrderReasonCode::Cvv => {
            assert_ne!(order.cvv.len(), 3, "corrupted CVV must not be 3 digits");
            assert!(order.cvv.chars().all(|c| c.is_ascii_digit()));
        }
        InvalidOrderReasonCode::CardNumber => {
            assert_ne!(order.credit_card_number.len(), 16);
            assert!(order.credit_card_number.chars().all(|c| c.is_ascii_digit()));
        }
        InvalidOrderReasonCode::Total => {
            assert_ne!(order.price_total_in_pence, order.computed_total_in_pence());
        }
        InvalidOrderReasonCode::ExpiryDate => {
            let (month, year) = order
                .credit_card_expiry
                .split_once('/')
                .expect("MM/YY shape");
            let month: u32 = month.parse().unwrap();
            let year: u32 = year.parse().unwrap();
            assert!((1..20).contains(&month));
            assert!(year <= 18, "expiry year must lie in the past");
        }
        InvalidOrderReasonCode::PizzaNotDefined => {
            let unknown = order.pizzas_in_order.last().unwrap();
            assert!(
                restaurants
                    .iter()
                    .all(|r| r.menu.iter().all(|p| p.name != unknown.name))
            );
        }
        InvalidOrderReasonCode::MaxPizzaCountExceeded => {
            assert!(order.pizzas_in_order.len() > MAX_PIZZAS_PER_ORDER);
            assert_eq!(order.price_total_in_pence, order.computed_total_in_pence());
        }
        InvalidOrderReasonCode::MultipleRestaurants => {
            let first = &order.pizzas_in_order.first().unwrap().name;
            let last = &order.pizzas_in_order.last().unwrap().name;
            let supplier = |name: &str| {
                restaurants
                    .iter()
                    .position(|r| r.menu.iter().any(|p| p.name == name))
            };
            assert_ne!(supplier(first), supplier(last));
            assert_eq!(order.price_total_in_pence, order.computed_total_in_pence());
        }
        InvalidOrderReasonCode::RestaurantClosed => {
            assert_eq!(order.pizzas_in_order.len(), 1);
            let pizza = &order.pizzas_in_order[0];
            let supplier = restaurants
                .iter()
                .find(|r| r.menu.iter().any(|p| p.name == pizza.name))
                .expect("pizza belongs to a reference restaurant");
            let day = DayOfWeek::from(order.order_date.weekday());
            assert!(!supplier.is_open_on(day));
        }
        InvalidOrderReasonCode::NoError => panic!("INVALID order carries NO_ERROR"),
    }
}

#[test]
fn corpus_round_trips_through_json() {
    let restaurants = two_restaurants();
    let mut rng = StdRng::seed_from_u64(7);
    let orders = generator::generate(&restaurants, &one_day_config(), &mut rng).unwrap();

    let json = serde_json::to_string_pretty(&orders).unwrap();
    let parsed: Vec<Order> = serde_json::from_str(&json).unwrap();

    let before: HashSet<_> = orders.iter().map(|o| o.order_no.clone()).collect();
    let after: HashSet<_> = parsed.iter().map(|o| o.order_no.clone()).collect();
    assert_eq!(before, after);
    assert_eq!(orders, parsed);
}

#[test]
fn different_seeds_share_the_same_structure() {
    let restaurants = two_restaurants();
    let config = one_day_config();

    let mut first_rng = StdRng::seed_from_u64(1);
    let mut second_rng = StdRng::seed_from_u64(2);
    let first = generator::generate(&restaurants, &config, &mut first_rng).unwrap();
    let second = generator::generate(&restaurants, &config, &mut second_rng).unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.order_status, b.order_status);
        assert_eq!(a.invalid_order_reason_code, b.invalid_order_reason_code);
        assert_eq!(a.order_date, b.order_date);
    }
}

#[test]
fn rejects_reference_data_without_a_closed_restaurant() {
    let all_days = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];
    let restaurants = vec![
        restaurant("Hilltop", "Hilltop Special", 1100, &all_days),
        restaurant("Quayside", "Quayside Classic", 900, &all_days),
    ];

    let mut rng = StdRng::seed_from_u64(3);
    let err = generator::generate(&restaurants, &one_day_config(), &mut rng).unwrap_err();
    assert!(matches!(err, GeneratorError::NoClosedRestaurant(_)));
}

#[test]
fn rejects_a_single_restaurant() {
    let restaurants = vec![restaurant(
        "Hilltop",
        "Hilltop Special",
        1100,
        &[DayOfWeek::Monday],
    )];
    let mut rng = StdRng::seed_from_u64(4);
    let err = generator::generate(&restaurants, &one_day_config(), &mut rng).unwrap_err();
    assert!(matches!(err, GeneratorError::NeedTwoRestaurants));
}

#[test]
fn rejects_an_empty_menu() {
    let mut restaurants = two_restaurants();
    restaurants[1].menu.clear();
    let mut rng = StdRng::seed_from_u64(5);
    let err = generator::generate(&restaurants, &one_day_config(), &mut rng).unwrap_err();
    assert!(matches!(err, GeneratorError::EmptyMenu(_)));
}

#[test]
fn selector_round_robins_across_the_reference_list() {
    let restaurants = two_restaurants();
    let mut selector = RestaurantSelector::new();

    assert_eq!(selector.next(&restaurants).name, "Hilltop");
    assert_eq!(selector.next(&restaurants).name, "Quayside");
    assert_eq!(selector.next(&restaurants).name, "Hilltop");
}

#[test]
fn base_orders_are_syntactically_valid() {
    let restaurants = two_restaurants();
    let mut selector = RestaurantSelector::new();
    let mut rng = StdRng::seed_from_u64(6);

    let order = generator::base_order(
        monday(),
        OrderStatus::Delivered,
        InvalidOrderReasonCode::NoError,
        &mut selector,
        &restaurants,
        &mut rng,
    );

    assert_eq!(order.order_no.len(), 8);
    assert!(order.order_no.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(order.cvv.len(), 3);
    assert_eq!(order.credit_card_number.len(), 16);
    assert_eq!(order.credit_card_expiry.len(), 5);
    assert_eq!(order.price_total_in_pence, order.computed_total_in_pence());
    assert_eq!(order.pizzas_in_order, restaurants[0].menu);
}
