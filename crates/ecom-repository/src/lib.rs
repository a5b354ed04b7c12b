//! # Ecom Repository
//!
//! Data access layer for the product catalog:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ProductRepository>  (domain interface)
//! MySqlProductRepository           (MySQL / SQLx)
//!   ↓
//! MySQL
//! ```

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;
