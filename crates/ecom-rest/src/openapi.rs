//! OpenAPI documentation configuration.
//!
//! This module provides OpenAPI/Swagger documentation generation for the REST API.

use crate::controllers::health_controller::HealthResponse;
use ecom_core::{ErrorResponse, FieldError, OperationResult};
use ecom_service::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use utoipa::OpenApi;

/// OpenAPI documentation for the product catalog API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ecom Catalog API",
        version = "1.0.0",
        description = "RESTful API for the product catalog",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Product endpoints
        crate::controllers::product_controller::list_products,
        crate::controllers::product_controller::get_product,
        crate::controllers::product_controller::add_product,
        crate::controllers::product_controller::update_product,
        crate::controllers::product_controller::delete_product,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            // Core types
            ErrorResponse,
            FieldError,
            OperationResult<ProductResponse>,
            OperationResult<Vec<ProductResponse>>,
            // Product DTOs
            CreateProductRequest,
            UpdateProductRequest,
            ProductResponse,
            // Health
            HealthResponse,
        )
    ),
    tags(
        (name = "products", description = "Product catalog endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
