//! Cache key generators for consistent key naming.
//!
//! Key shapes are part of the service contract: collection reads share one
//! key, single-product reads get a per-id key.

use ecom_core::ProductId;

/// Cache key for the full product listing.
pub const ALL_PRODUCTS: &str = "all_products";

/// Generate a cache key for a product by ID.
#[must_use]
pub fn product_by_id(id: ProductId) -> String {
    format!("product_{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_products_key() {
        assert_eq!(ALL_PRODUCTS, "all_products");
    }

    #[test]
    fn test_product_by_id_key() {
        assert_eq!(product_by_id(ProductId::new(1)), "product_1");
        assert_eq!(product_by_id(ProductId::new(42)), "product_42");
    }
}
