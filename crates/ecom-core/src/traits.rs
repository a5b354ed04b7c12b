//! Core traits shared across layers.

use crate::EcomResult;
use async_trait::async_trait;

/// Base repository trait for CRUD operations.
///
/// Uniform signatures independent of entity shape; per-entity interfaces
/// are declared as subtraits so they stay dyn-compatible and injectable.
/// Absence on a keyed read is a normal outcome (`Ok(None)`), never an
/// error. Storage faults surface as `Err` and are not handled here.
#[async_trait]
pub trait Repository<T, Id>: Send + Sync
where
    T: Send + Sync,
    Id: Send + Sync,
{
    /// Returns every stored entity, in store order.
    async fn get_all(&self) -> EcomResult<Vec<T>>;

    /// Returns the entity with the matching key, or `None` if absent.
    async fn get_by_id(&self, id: Id) -> EcomResult<Option<T>>;

    /// Persists a new entity; returns it with the store-assigned key.
    async fn add(&self, entity: &T) -> EcomResult<T>;

    /// Persists the entity's in-memory state over the stored row.
    ///
    /// The caller is responsible for having merged changes onto a
    /// previously fetched instance.
    async fn update(&self, entity: &T) -> EcomResult<()>;

    /// Removes the given entity from the store.
    async fn delete(&self, entity: &T) -> EcomResult<()>;
}

/// Trait for entities with a unique identifier.
pub trait Entity<Id> {
    /// Returns the entity's unique identifier.
    fn id(&self) -> Id;
}
