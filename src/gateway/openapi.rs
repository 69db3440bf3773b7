//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::{HealthResponse, RegisterUserResponse};
use crate::gateway::types::{CreateOrderRequest, RegisterUserRequest};
use crate::order::{InvoiceView, OrderView};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Desk API",
        version = "1.0.0",
        description = "Place orders, look them up, compute invoice amounts and register users.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::order::create_order,
        crate::gateway::handlers::order::get_order,
        crate::gateway::handlers::order::get_invoice,
        crate::gateway::handlers::user::register_user,
    ),
    components(
        schemas(
            HealthResponse,
            CreateOrderRequest,
            OrderView,
            InvoiceView,
            RegisterUserRequest,
            RegisterUserResponse,
        )
    ),
    tags(
        (name = "Orders", description = "Order placement, retrieval and invoicing"),
        (name = "Users", description = "User registration"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;
