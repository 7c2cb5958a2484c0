use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    models::{
        DayOfWeek, InvalidOrderReasonCode, LngLat, NamedRegion, Order, OrderStatus, Pizza,
        Restaurant, TestItem,
    },
    routes::{health, orders, regions, restaurants},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        orders::orders,
        orders::orders_for_date,
        orders::orders_with_outcome,
        orders::orders_with_outcome_for_date,
        orders::order_details,
        orders::order_status,
        orders::is_order_outcome_valid,
        restaurants::restaurants,
        regions::central_area,
        regions::no_fly_zones,
        health::is_alive,
        health::test_echo,
        health::test_echo_with_input,
    ),
    components(
        schemas(
            Order,
            OrderStatus,
            InvalidOrderReasonCode,
            Pizza,
            Restaurant,
            DayOfWeek,
            LngLat,
            NamedRegion,
            TestItem,
        )
    ),
    tags(
        (name = "Orders", description = "Sample order fixture endpoints"),
        (name = "Restaurants", description = "Restaurant reference data"),
        (name = "Regions", description = "Central area and no-fly zones"),
        (name = "Service", description = "Availability checks"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
