//! Data transfer objects for the service layer.

pub mod product_dto;

pub use product_dto::*;
