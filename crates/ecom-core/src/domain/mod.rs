//! Domain entities.

pub mod product;

pub use product::Product;
