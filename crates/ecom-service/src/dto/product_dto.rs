//! Product-related DTOs.

use chrono::{DateTime, Utc};
use ecom_core::{Product, ProductId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to add a new product to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(
        length(min = 1, max = 128, message = "Name must be 1-128 characters"),
        custom(function = ecom_core::validation::rules::not_blank)
    )]
    pub name: String,

    #[validate(length(max = 1024, message = "Description cannot exceed 1024 characters"))]
    #[serde(default)]
    pub description: String,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i32,
}

/// Request to update an existing product.
///
/// Carries the target product's key in the body rather than the URL.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[schema(value_type = i64)]
    pub id: ProductId,

    #[validate(
        length(min = 1, max = 128, message = "Name must be 1-128 characters"),
        custom(function = ecom_core::validation::rules::not_blank)
    )]
    pub name: String,

    #[validate(length(max = 1024, message = "Description cannot exceed 1024 characters"))]
    #[serde(default)]
    pub description: String,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i32,
}

/// Product response DTO.
///
/// This is the shape that travels to callers and into the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    #[schema(value_type = i64)]
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            stock: product.stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
