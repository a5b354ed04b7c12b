//! Product entity.

use crate::{Entity, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product entity representing one catalog record in the backing store.
///
/// Owned by the repository layer; the service never returns it to callers
/// directly, only its transfer representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned numeric key, unique within the catalog.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Unit price.
    pub price: f64,

    /// Units in stock.
    pub stock: i32,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new, not-yet-persisted product. The store assigns the key
    /// on insert.
    #[must_use]
    pub fn new(name: String, description: String, price: f64, stock: i32) -> Self {
        let now = Utc::now();
        Self {
            id: ProductId::UNASSIGNED,
            name,
            description,
            price,
            stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the mutable fields in place, bumping `updated_at`.
    pub fn apply_update(&mut self, name: String, description: String, price: f64, stock: i32) {
        self.name = name;
        self.description = description;
        self.price = price;
        self.stock = stock;
        self.updated_at = Utc::now();
    }

    /// Checks if the product is in stock.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl Entity<ProductId> for Product {
    fn id(&self) -> ProductId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_is_unassigned() {
        let product = Product::new("Laptop".to_string(), "A laptop".to_string(), 999.99, 5);
        assert_eq!(product.id, ProductId::UNASSIGNED);
        assert_eq!(product.name, "Laptop");
        assert!(product.in_stock());
    }

    #[test]
    fn test_apply_update_overwrites_mutable_fields() {
        let mut product = Product::new("OldName".to_string(), "old".to_string(), 1.0, 1);
        let created_at = product.created_at;

        product.apply_update("NewName".to_string(), "new".to_string(), 2.0, 0);

        assert_eq!(product.name, "NewName");
        assert_eq!(product.description, "new");
        assert_eq!(product.price, 2.0);
        assert_eq!(product.stock, 0);
        assert_eq!(product.created_at, created_at);
        assert!(!product.in_stock());
    }
}
