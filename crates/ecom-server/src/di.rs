//! Dependency injection module using Shaku.
//!
//! Wires the database pool, repository, cache, and product service into
//! a single module for the monolithic server process.

use ecom_config::CacheConfig;
use ecom_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, MySqlProductRepository,
    ProductRepository,
};
use ecom_service::{
    CacheInterface, MemoryCacheService, MemoryCacheServiceParameters, ProductService,
    ProductServiceComponent,
};
use shaku::{module, HasComponent};
use std::sync::Arc;

module! {
    pub AppModule {
        components = [
            DatabasePool,
            MySqlProductRepository,
            MemoryCacheService,
            ProductServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the application module from a connected database pool.
pub fn build_app_module(db_pool: &DatabasePool, cache_config: &CacheConfig) -> Arc<AppModule> {
    let module = AppModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .with_component_parameters::<MemoryCacheService>(MemoryCacheServiceParameters {
            entries: Default::default(),
            enabled: cache_config.enabled,
            default_ttl: cache_config.default_ttl(),
        })
        .build();

    Arc::new(module)
}

/// Trait for resolving common services from the module.
pub trait ServiceResolver {
    /// Resolves the product service from the module.
    fn product_service(&self) -> Arc<dyn ProductService>;

    /// Resolves the product repository from the module.
    fn product_repository(&self) -> Arc<dyn ProductRepository>;

    /// Resolves the database pool from the module.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;

    /// Resolves the cache interface from the module.
    fn cache(&self) -> Arc<dyn CacheInterface>;
}

impl ServiceResolver for AppModule {
    fn product_service(&self) -> Arc<dyn ProductService> {
        self.resolve()
    }

    fn product_repository(&self) -> Arc<dyn ProductRepository> {
        self.resolve()
    }

    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }

    fn cache(&self) -> Arc<dyn CacheInterface> {
        self.resolve()
    }
}
