//! Product service interface.

use crate::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use async_trait::async_trait;
use ecom_core::{EcomResult, OperationResult, ProductId};
use shaku::Interface;

/// Product catalog service.
///
/// Every operation returns an [`OperationResult`] envelope: expected
/// outcomes, including a missing product, travel as data with `success`
/// set accordingly. The `Err` branch is reserved for faults (storage,
/// validation, serialization) and propagates to the caller untouched.
#[async_trait]
pub trait ProductService: Interface + Send + Sync {
    /// Returns the full product listing, served from cache when possible.
    async fn get_all_products(&self) -> EcomResult<OperationResult<Vec<ProductResponse>>>;

    /// Returns a single product by key, served from cache when possible.
    async fn get_product(&self, id: ProductId) -> EcomResult<OperationResult<ProductResponse>>;

    /// Adds a new product to the catalog.
    async fn add_product(
        &self,
        request: CreateProductRequest,
    ) -> EcomResult<OperationResult<ProductResponse>>;

    /// Updates an existing product. The target key travels in the request.
    async fn update_product(
        &self,
        request: UpdateProductRequest,
    ) -> EcomResult<OperationResult<ProductResponse>>;

    /// Removes a product from the catalog.
    async fn delete_product(&self, id: ProductId)
        -> EcomResult<OperationResult<ProductResponse>>;
}
