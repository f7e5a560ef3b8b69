//! Remote lookups consulted before a cart change is committed.
//!
//! Both lookups are queried on demand and never cached beyond a single
//! operation.

pub mod http;
pub mod memory;

use async_trait::async_trait;

use crate::domain::{ProductId, ProductInfo, Stock};
use crate::error::OracleError;

pub use http::HttpCatalog;
pub use memory::InMemoryCatalog;

/// Reports the available quantity of a product.
#[async_trait]
pub trait StockOracle: Send + Sync {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, OracleError>;
}

/// Reports display metadata for a product.
#[async_trait]
pub trait CatalogOracle: Send + Sync {
    async fn product(&self, product_id: ProductId) -> Result<ProductInfo, OracleError>;
}
