use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Fixed delivery charge added to every order total.
pub const ORDER_CHARGE_IN_PENCE: i64 = 100;

/// Platform maximum of pizzas a single order may carry.
pub const MAX_PIZZAS_PER_ORDER: usize = 4;

pub const VALID_CVV_LENGTH: usize = 3;
pub const VALID_CARD_NUMBER_LENGTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pizza {
    pub name: String,
    pub price_in_pence: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayOfWeek::Monday => "MONDAY",
            DayOfWeek::Tuesday => "TUESDAY",
            DayOfWeek::Wednesday => "WEDNESDAY",
            DayOfWeek::Thursday => "THURSDAY",
            DayOfWeek::Friday => "FRIDAY",
            DayOfWeek::Saturday => "SATURDAY",
            DayOfWeek::Sunday => "SUNDAY",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub name: String,
    pub location: LngLat,
    pub opening_days: Vec<DayOfWeek>,
    pub menu: Vec<Pizza>,
}

impl Restaurant {
    pub fn is_open_on(&self, day: DayOfWeek) -> bool {
        self.opening_days.contains(&day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Delivered,
    ValidButNotDelivered,
    Invalid,
    Undefined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvalidOrderReasonCode {
    Cvv,
    CardNumber,
    Total,
    ExpiryDate,
    PizzaNotDefined,
    MaxPizzaCountExceeded,
    MultipleRestaurants,
    RestaurantClosed,
    NoError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_no: String,
    pub order_date: NaiveDate,
    pub customer: String,
    pub credit_card_number: String,
    pub credit_card_expiry: String,
    pub cvv: String,
    pub price_total_in_pence: i64,
    pub pizzas_in_order: Vec<Pizza>,
    pub order_status: OrderStatus,
    pub invalid_order_reason_code: InvalidOrderReasonCode,
}

impl Order {
    /// The correct total for the current item set, surcharge included.
    pub fn computed_total_in_pence(&self) -> i64 {
        self.pizzas_in_order
            .iter()
            .map(|p| p.price_in_pence)
            .sum::<i64>()
            + ORDER_CHARGE_IN_PENCE
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NamedRegion {
    pub name: String,
    pub vertices: Vec<LngLat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestItem {
    pub greeting: String,
}
