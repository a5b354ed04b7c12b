//! Product service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::mappers;
use crate::product_service::ProductService;
use async_trait::async_trait;
use ecom_core::{EcomResult, OperationResult, Product, ProductId, ValidateExt};
use ecom_repository::ProductRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

const PRODUCT_NOT_FOUND: &str = "Product not found";
const PRODUCT_ADDED: &str = "Product added successfully";
const PRODUCT_UPDATED: &str = "Product updated successfully";
const PRODUCT_DELETED: &str = "Product deleted successfully";
const PRODUCTS_RETRIEVED: &str = "Products retrieved successfully";
const PRODUCT_RETRIEVED: &str = "Product retrieved successfully";

/// Product service component for Shaku DI.
///
/// Reads follow the cache-aside pattern: check the injected cache, fall
/// back to the repository on a miss, then populate the cache. Writes go
/// straight to the repository and do not touch cached entries, so reads
/// may serve stale data until the entry expires.
#[derive(Component)]
#[shaku(interface = ProductService)]
pub struct ProductServiceComponent {
    #[shaku(inject)]
    product_repository: Arc<dyn ProductRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
}

impl ProductServiceComponent {
    /// Creates a new product service.
    #[must_use]
    pub fn new(
        product_repository: Arc<dyn ProductRepository>,
        cache: Arc<dyn CacheInterface>,
    ) -> Self {
        Self {
            product_repository,
            cache,
        }
    }
}

#[async_trait]
impl ProductService for ProductServiceComponent {
    async fn get_all_products(&self) -> EcomResult<OperationResult<Vec<ProductResponse>>> {
        debug!("Getting all products");

        // Try cache first
        if let Some(cached) = self
            .cache
            .get::<Vec<ProductResponse>>(cache_keys::ALL_PRODUCTS)
            .await?
        {
            debug!("Cache hit for product listing");
            return Ok(OperationResult::ok(cached, PRODUCTS_RETRIEVED));
        }

        let products = self.product_repository.get_all().await?;
        let responses: Vec<ProductResponse> =
            products.iter().map(ProductResponse::from).collect();

        // Cache the result (ignore errors as the value is still valid)
        let _ = self
            .cache
            .set(cache_keys::ALL_PRODUCTS, &responses, self.cache.default_ttl())
            .await;

        Ok(OperationResult::ok(responses, PRODUCTS_RETRIEVED))
    }

    async fn get_product(&self, id: ProductId) -> EcomResult<OperationResult<ProductResponse>> {
        debug!("Getting product: {}", id);

        let cache_key = cache_keys::product_by_id(id);

        // Try cache first
        if let Some(cached) = self.cache.get::<ProductResponse>(&cache_key).await? {
            debug!("Cache hit for product: {}", id);
            return Ok(OperationResult::ok(cached, PRODUCT_RETRIEVED));
        }

        let Some(product) = self.product_repository.get_by_id(id).await? else {
            debug!("Product not found: {}", id);
            return Ok(OperationResult::fail(PRODUCT_NOT_FOUND));
        };

        let response = ProductResponse::from(product);

        // Cache the result; absent products are not cached
        let _ = self
            .cache
            .set(&cache_key, &response, self.cache.default_ttl())
            .await;

        Ok(OperationResult::ok(response, PRODUCT_RETRIEVED))
    }

    async fn add_product(
        &self,
        request: CreateProductRequest,
    ) -> EcomResult<OperationResult<ProductResponse>> {
        debug!("Adding product: {}", request.name);

        request.validate_request()?;

        let product = Product::from(request);
        let saved = self.product_repository.add(&product).await?;

        info!("Product added: {}", saved.id);
        Ok(OperationResult::ok(
            ProductResponse::from(saved),
            PRODUCT_ADDED,
        ))
    }

    async fn update_product(
        &self,
        request: UpdateProductRequest,
    ) -> EcomResult<OperationResult<ProductResponse>> {
        debug!("Updating product: {}", request.id);

        request.validate_request()?;

        let Some(mut product) = self.product_repository.get_by_id(request.id).await? else {
            debug!("Product not found for update: {}", request.id);
            return Ok(OperationResult::fail(PRODUCT_NOT_FOUND));
        };

        mappers::apply_update(&mut product, request);
        self.product_repository.update(&product).await?;

        info!("Product updated: {}", product.id);
        Ok(OperationResult::ok(
            ProductResponse::from(product),
            PRODUCT_UPDATED,
        ))
    }

    async fn delete_product(
        &self,
        id: ProductId,
    ) -> EcomResult<OperationResult<ProductResponse>> {
        debug!("Deleting product: {}", id);

        let Some(product) = self.product_repository.get_by_id(id).await? else {
            debug!("Product not found for delete: {}", id);
            return Ok(OperationResult::fail(PRODUCT_NOT_FOUND));
        };

        self.product_repository.delete(&product).await?;

        info!("Product deleted: {}", id);
        Ok(OperationResult::ok_message(PRODUCT_DELETED))
    }
}

impl std::fmt::Debug for ProductServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductServiceComponent").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{MemoryCacheService, DEFAULT_TTL};
    use async_trait::async_trait;
    use ecom_core::{EcomError, Repository};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// In-memory repository that counts calls, so tests can assert which
    /// reads were served from the cache.
    struct CountingRepository {
        products: Mutex<HashMap<ProductId, Product>>,
        next_id: AtomicI64,
        get_all_calls: AtomicUsize,
        get_by_id_calls: AtomicUsize,
        add_calls: AtomicUsize,
        update_calls: AtomicUsize,
        delete_calls: AtomicUsize,
        fail_reads: bool,
    }

    impl CountingRepository {
        fn new() -> Self {
            Self {
                products: Mutex::new(HashMap::new()),
                next_id: AtomicI64::new(1),
                get_all_calls: AtomicUsize::new(0),
                get_by_id_calls: AtomicUsize::new(0),
                add_calls: AtomicUsize::new(0),
                update_calls: AtomicUsize::new(0),
                delete_calls: AtomicUsize::new(0),
                fail_reads: false,
            }
        }

        fn with_products(products: Vec<Product>) -> Self {
            let repo = Self::new();
            for mut product in products {
                if !product.id.is_assigned() {
                    product.id = ProductId::new(repo.next_id.fetch_add(1, Ordering::SeqCst));
                }
                repo.products.lock().unwrap().insert(product.id, product);
            }
            repo
        }

        fn failing() -> Self {
            let mut repo = Self::new();
            repo.fail_reads = true;
            repo
        }
    }

    #[async_trait]
    impl Repository<Product, ProductId> for CountingRepository {
        async fn get_all(&self) -> EcomResult<Vec<Product>> {
            self.get_all_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_reads {
                return Err(EcomError::Database("connection refused".to_string()));
            }
            let mut products: Vec<Product> =
                self.products.lock().unwrap().values().cloned().collect();
            products.sort_by_key(|p| p.id.into_inner());
            Ok(products)
        }

        async fn get_by_id(&self, id: ProductId) -> EcomResult<Option<Product>> {
            self.get_by_id_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_reads {
                return Err(EcomError::Database("connection refused".to_string()));
            }
            Ok(self.products.lock().unwrap().get(&id).cloned())
        }

        async fn add(&self, entity: &Product) -> EcomResult<Product> {
            self.add_calls.fetch_add(1, Ordering::SeqCst);
            let mut product = entity.clone();
            product.id = ProductId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
            self.products
                .lock()
                .unwrap()
                .insert(product.id, product.clone());
            Ok(product)
        }

        async fn update(&self, entity: &Product) -> EcomResult<()> {
            self.update_calls.fetch_add(1, Ordering::SeqCst);
            self.products
                .lock()
                .unwrap()
                .insert(entity.id, entity.clone());
            Ok(())
        }

        async fn delete(&self, entity: &Product) -> EcomResult<()> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            self.products.lock().unwrap().remove(&entity.id);
            Ok(())
        }
    }

    fn service_with(repo: CountingRepository) -> (ProductServiceComponent, Arc<CountingRepository>) {
        let repo = Arc::new(repo);
        let cache = Arc::new(MemoryCacheService::new());
        let service = ProductServiceComponent::new(repo.clone(), cache);
        (service, repo)
    }

    fn service_with_cache(
        repo: CountingRepository,
        cache: Arc<MemoryCacheService>,
    ) -> (ProductServiceComponent, Arc<CountingRepository>) {
        let repo = Arc::new(repo);
        let service = ProductServiceComponent::new(repo.clone(), cache);
        (service, repo)
    }

    fn test_product(name: &str) -> Product {
        Product::new(name.to_string(), format!("{} description", name), 999.99, 5)
    }

    fn create_request(name: &str) -> CreateProductRequest {
        CreateProductRequest {
            name: name.to_string(),
            description: "A product".to_string(),
            price: 999.99,
            stock: 5,
        }
    }

    #[tokio::test]
    async fn test_get_all_when_cache_empty_fetches_and_caches() {
        let cache = Arc::new(MemoryCacheService::new());
        let (service, repo) = service_with_cache(
            CountingRepository::with_products(vec![test_product("Laptop")]),
            cache.clone(),
        );

        let result = service.get_all_products().await.unwrap();

        assert!(result.is_success());
        let products = result.data.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Laptop");
        assert_eq!(repo.get_all_calls.load(Ordering::SeqCst), 1);

        // The listing is now cached under the shared key
        let cached: Option<Vec<ProductResponse>> =
            cache.get(cache_keys::ALL_PRODUCTS).await.unwrap();
        assert_eq!(cached.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_all_when_cached_skips_repository() {
        let cache = Arc::new(MemoryCacheService::new());
        let cached_product = ProductResponse::from(&{
            let mut p = test_product("CachedProduct");
            p.id = ProductId::new(99);
            p
        });
        cache
            .set(cache_keys::ALL_PRODUCTS, &vec![cached_product], DEFAULT_TTL)
            .await
            .unwrap();

        let (service, repo) = service_with_cache(CountingRepository::new(), cache);

        let result = service.get_all_products().await.unwrap();

        assert!(result.is_success());
        assert_eq!(result.data.unwrap()[0].name, "CachedProduct");
        assert_eq!(repo.get_all_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_get_all_empty_catalog_is_success() {
        let (service, _repo) = service_with(CountingRepository::new());

        let result = service.get_all_products().await.unwrap();

        assert!(result.is_success());
        assert!(result.data.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_product_when_cache_empty_fetches_and_caches() {
        let cache = Arc::new(MemoryCacheService::new());
        let (service, repo) = service_with_cache(
            CountingRepository::with_products(vec![test_product("Phone")]),
            cache.clone(),
        );

        let result = service.get_product(ProductId::new(1)).await.unwrap();

        assert!(result.is_success());
        assert_eq!(result.data.unwrap().name, "Phone");
        assert_eq!(repo.get_by_id_calls.load(Ordering::SeqCst), 1);

        let cached: Option<ProductResponse> = cache.get("product_1").await.unwrap();
        assert_eq!(cached.unwrap().name, "Phone");
    }

    #[tokio::test]
    async fn test_get_product_when_cached_skips_repository() {
        let cache = Arc::new(MemoryCacheService::new());
        let mut cached = test_product("CachedPhone");
        cached.id = ProductId::new(1);
        cache
            .set("product_1", &ProductResponse::from(&cached), DEFAULT_TTL)
            .await
            .unwrap();

        let (service, repo) = service_with_cache(CountingRepository::new(), cache);

        let result = service.get_product(ProductId::new(1)).await.unwrap();

        assert!(result.is_success());
        assert_eq!(result.data.unwrap().name, "CachedPhone");
        assert_eq!(repo.get_by_id_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_get_product_not_found_returns_failure_envelope() {
        let cache = Arc::new(MemoryCacheService::new());
        let (service, _repo) = service_with_cache(CountingRepository::new(), cache.clone());

        let result = service.get_product(ProductId::new(1)).await.unwrap();

        assert!(!result.is_success());
        assert!(result.data.is_none());
        assert_eq!(result.message, "Product not found");

        // Absent products are not cached
        assert!(!cache.exists("product_1").await.unwrap());
    }

    #[tokio::test]
    async fn test_get_product_storage_fault_propagates() {
        let (service, _repo) = service_with(CountingRepository::failing());

        let result = service.get_product(ProductId::new(1)).await;
        assert!(matches!(result, Err(EcomError::Database(_))));
    }

    #[tokio::test]
    async fn test_get_all_storage_fault_propagates() {
        let (service, _repo) = service_with(CountingRepository::failing());

        let result = service.get_all_products().await;
        assert!(matches!(result, Err(EcomError::Database(_))));
    }

    #[tokio::test]
    async fn test_add_product_success() {
        let (service, repo) = service_with(CountingRepository::new());

        let result = service.add_product(create_request("Car")).await.unwrap();

        assert!(result.is_success());
        assert_eq!(result.message, "Product added successfully");
        let product = result.data.unwrap();
        assert!(product.id.is_assigned());
        assert_eq!(product.name, "Car");
        assert_eq!(repo.add_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_add_product_rejects_blank_name() {
        let (service, _repo) = service_with(CountingRepository::new());

        let result = service.add_product(create_request("   ")).await;
        assert!(matches!(result, Err(EcomError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_existing_product() {
        let (service, repo) =
            service_with(CountingRepository::with_products(vec![test_product("OldName")]));

        let request = UpdateProductRequest {
            id: ProductId::new(1),
            name: "NewName".to_string(),
            description: "updated".to_string(),
            price: 1299.99,
            stock: 3,
        };
        let result = service.update_product(request).await.unwrap();

        assert!(result.is_success());
        assert_eq!(result.message, "Product updated successfully");
        assert_eq!(result.data.unwrap().name, "NewName");
        assert_eq!(repo.get_by_id_calls.load(Ordering::SeqCst), 1);
        assert_eq!(repo.update_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_failure_envelope() {
        let (service, repo) = service_with(CountingRepository::new());

        let request = UpdateProductRequest {
            id: ProductId::new(1),
            name: "NewName".to_string(),
            description: String::new(),
            price: 1.0,
            stock: 1,
        };
        let result = service.update_product(request).await.unwrap();

        assert!(!result.is_success());
        assert_eq!(result.message, "Product not found");
        // The missing product is never written
        assert_eq!(repo.get_by_id_calls.load(Ordering::SeqCst), 1);
        assert_eq!(repo.update_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_delete_existing_product() {
        let (service, repo) =
            service_with(CountingRepository::with_products(vec![test_product("Laptop")]));

        let result = service.delete_product(ProductId::new(1)).await.unwrap();

        assert!(result.is_success());
        assert_eq!(result.message, "Product deleted successfully");
        assert!(repo.products.lock().unwrap().is_empty());
        assert_eq!(repo.get_by_id_calls.load(Ordering::SeqCst), 1);
        assert_eq!(repo.delete_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_product_returns_failure_envelope() {
        let (service, repo) = service_with(CountingRepository::new());

        let result = service.delete_product(ProductId::new(1)).await.unwrap();

        assert!(!result.is_success());
        assert_eq!(result.message, "Product not found");
        assert_eq!(repo.delete_calls.load(Ordering::SeqCst), 0);
    }

    // Writes do not touch cached entries, so reads after a mutation may
    // serve the previous state until the entry expires. These tests pin
    // that behavior down.

    #[tokio::test]
    async fn test_read_after_update_serves_stale_entry() {
        let (service, _repo) =
            service_with(CountingRepository::with_products(vec![test_product("OldName")]));

        // Populate the per-product cache entry
        let first = service.get_product(ProductId::new(1)).await.unwrap();
        assert_eq!(first.data.unwrap().name, "OldName");

        let request = UpdateProductRequest {
            id: ProductId::new(1),
            name: "NewName".to_string(),
            description: String::new(),
            price: 1.0,
            stock: 1,
        };
        service.update_product(request).await.unwrap();

        let second = service.get_product(ProductId::new(1)).await.unwrap();
        assert_eq!(second.data.unwrap().name, "OldName");
    }

    #[tokio::test]
    async fn test_listing_after_add_serves_stale_entry() {
        let (service, _repo) =
            service_with(CountingRepository::with_products(vec![test_product("Laptop")]));

        let first = service.get_all_products().await.unwrap();
        assert_eq!(first.data.unwrap().len(), 1);

        service.add_product(create_request("Phone")).await.unwrap();

        let second = service.get_all_products().await.unwrap();
        assert_eq!(second.data.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_leaves_cached_entry_behind() {
        let (service, _repo) =
            service_with(CountingRepository::with_products(vec![test_product("Laptop")]));

        service.get_product(ProductId::new(1)).await.unwrap();
        service.delete_product(ProductId::new(1)).await.unwrap();

        // The cached entry still answers for the deleted product
        let result = service.get_product(ProductId::new(1)).await.unwrap();
        assert!(result.is_success());
        assert_eq!(result.data.unwrap().name, "Laptop");
    }

    #[tokio::test]
    async fn test_cached_listing_expires_after_configured_ttl() {
        let cache = Arc::new(MemoryCacheService::with_ttl(Duration::from_millis(20)));
        let (service, repo) = service_with_cache(
            CountingRepository::with_products(vec![test_product("Laptop")]),
            cache,
        );

        service.get_all_products().await.unwrap();
        assert_eq!(repo.get_all_calls.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_millis(100)).await;

        // The entry written with the cache's configured TTL has expired
        service.get_all_products().await.unwrap();
        assert_eq!(repo.get_all_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_disabled_cache_always_hits_repository() {
        let repo = Arc::new(CountingRepository::with_products(vec![test_product("Laptop")]));
        let service =
            ProductServiceComponent::new(repo.clone(), Arc::new(MemoryCacheService::disabled()));

        service.get_product(ProductId::new(1)).await.unwrap();
        service.get_product(ProductId::new(1)).await.unwrap();

        assert_eq!(repo.get_by_id_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_concurrent_reads_are_consistent() {
        let repo = Arc::new(CountingRepository::with_products(vec![test_product("Laptop")]));
        let service = Arc::new(ProductServiceComponent::new(
            repo.clone(),
            Arc::new(MemoryCacheService::new()),
        ));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.get_product(ProductId::new(1)).await.unwrap()
            }));
        }

        for handle in handles {
            let result = handle.await.unwrap();
            assert!(result.is_success());
            assert_eq!(result.data.unwrap().name, "Laptop");
        }
    }
}
