//! OpenAPI / Swagger UI documentation.
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::types::ErrorResponse;
use crate::health::{
    DependencyProbeResult, DependencyStatus, HealthReport, OverallStatus, UtilizationReport,
    UtilizationStatus,
};
use crate::models::{CustomerId, Order, OrderStatus};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Intake API",
        version = "1.0.0",
        description = "Order submission with validation, plus consolidated dependency health reporting.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::order::create_order,
        crate::gateway::handlers::order::get_order,
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::health::healthz,
    ),
    components(
        schemas(
            Order,
            OrderStatus,
            CustomerId,
            ErrorResponse,
            HealthReport,
            OverallStatus,
            DependencyProbeResult,
            DependencyStatus,
            UtilizationReport,
            UtilizationStatus,
        )
    ),
    tags(
        (name = "Orders", description = "Order intake"),
        (name = "System", description = "Health and diagnostics")
    )
)]
pub struct ApiDoc;
