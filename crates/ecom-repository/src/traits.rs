//! Repository interfaces for the catalog entities.

use ecom_core::{Interface, Product, ProductId, Repository};

/// Product repository interface.
///
/// A dyn-compatible marker over the generic CRUD contract so the service
/// layer can hold `Arc<dyn ProductRepository>` and the DI container can
/// resolve it. Any type providing the CRUD contract gets this for free.
pub trait ProductRepository: Repository<Product, ProductId> + Interface {}

impl<T> ProductRepository for T where T: Repository<Product, ProductId> + Interface {}
