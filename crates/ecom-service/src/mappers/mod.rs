//! Mapping between DTOs and domain entities.

use crate::dto::{CreateProductRequest, UpdateProductRequest};
use ecom_core::Product;

impl From<CreateProductRequest> for Product {
    fn from(request: CreateProductRequest) -> Self {
        Self::new(
            request.name,
            request.description,
            request.price,
            request.stock,
        )
    }
}

/// Applies an update request onto an existing product entity.
pub fn apply_update(product: &mut Product, request: UpdateProductRequest) {
    product.apply_update(
        request.name,
        request.description,
        request.price,
        request.stock,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecom_core::ProductId;

    #[test]
    fn test_product_from_create_request() {
        let request = CreateProductRequest {
            name: "Laptop".to_string(),
            description: "A laptop".to_string(),
            price: 999.99,
            stock: 5,
        };

        let product = Product::from(request);
        assert_eq!(product.id, ProductId::UNASSIGNED);
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.stock, 5);
    }

    #[test]
    fn test_apply_update_keeps_identity() {
        let mut product = Product::new("OldName".to_string(), "old".to_string(), 1.0, 1);
        product.id = ProductId::new(7);

        apply_update(
            &mut product,
            UpdateProductRequest {
                id: ProductId::new(7),
                name: "NewName".to_string(),
                description: "new".to_string(),
                price: 2.0,
                stock: 2,
            },
        );

        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.name, "NewName");
        assert_eq!(product.price, 2.0);
    }
}
