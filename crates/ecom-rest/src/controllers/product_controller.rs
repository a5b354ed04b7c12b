//! Product catalog controller.

use crate::{
    responses::{ApiResult, AppError, Created, Envelope},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use ecom_core::{ErrorResponse, OperationResult, ProductId};
use ecom_service::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use tracing::debug;

/// Creates the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_products).post(add_product).put(update_product),
        )
        .route("/:id", get(get_product).delete(delete_product))
}

/// List all products.
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    responses(
        (status = 200, description = "Product listing", body = OperationResult<Vec<ProductResponse>>)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Vec<ProductResponse>> {
    debug!("List products request");

    let result = state.product_service.get_all_products().await?;
    Ok(Envelope(result))
}

/// Get a product by ID.
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = OperationResult<ProductResponse>),
        (status = 404, description = "Product not found", body = OperationResult<ProductResponse>)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<ProductResponse> {
    debug!("Get product request: {}", id);

    let result = state.product_service.get_product(ProductId::new(id)).await?;
    Ok(Envelope(result))
}

/// Add a new product.
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product added", body = OperationResult<ProductResponse>),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn add_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<Created<ProductResponse>, AppError> {
    debug!("Add product request: {}", request.name);

    let result = state.product_service.add_product(request).await?;
    Ok(Created(result))
}

/// Update an existing product. The target product's ID travels in the body.
#[utoipa::path(
    put,
    path = "/products",
    tag = "products",
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = OperationResult<ProductResponse>),
        (status = 404, description = "Product not found", body = OperationResult<ProductResponse>),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Json(request): Json<UpdateProductRequest>,
) -> ApiResult<ProductResponse> {
    debug!("Update product request: {}", request.id);

    let result = state.product_service.update_product(request).await?;
    Ok(Envelope(result))
}

/// Delete a product.
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = OperationResult<ProductResponse>),
        (status = 404, description = "Product not found", body = OperationResult<ProductResponse>)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<ProductResponse> {
    debug!("Delete product request: {}", id);

    let result = state
        .product_service
        .delete_product(ProductId::new(id))
        .await?;
    Ok(Envelope(result))
}
