//! In-memory stock and catalog lookups for tests and offline demos.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::{CatalogOracle, StockOracle};
use crate::domain::{ProductId, ProductInfo, Stock};
use crate::error::OracleError;

#[derive(Debug, Default)]
struct InMemoryCatalogState {
    products: HashMap<ProductId, ProductInfo>,
    stock: HashMap<ProductId, i64>,
    fail_stock: bool,
    fail_catalog: bool,
    stock_lookups: usize,
    catalog_lookups: usize,
}

/// Catalog and stock tables held in memory.
///
/// Clones share state, so a test can keep one handle and adjust stock while
/// the cart service owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<RwLock<InMemoryCatalogState>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a product with its available stock.
    pub fn with_product(self, info: ProductInfo, stock: i64) -> Self {
        self.insert(info, stock);
        self
    }

    pub fn insert(&self, info: ProductInfo, stock: i64) {
        let mut state = self.write();
        state.stock.insert(info.id, stock);
        state.products.insert(info.id, info);
    }

    pub fn set_stock(&self, product_id: ProductId, amount: i64) {
        self.write().stock.insert(product_id, amount);
    }

    /// Makes every stock lookup fail until reset.
    pub fn set_fail_stock(&self, fail: bool) {
        self.write().fail_stock = fail;
    }

    /// Makes every catalog lookup fail until reset.
    pub fn set_fail_catalog(&self, fail: bool) {
        self.write().fail_catalog = fail;
    }

    pub fn stock_lookups(&self) -> usize {
        self.read().stock_lookups
    }

    pub fn catalog_lookups(&self) -> usize {
        self.read().catalog_lookups
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, InMemoryCatalogState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, InMemoryCatalogState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl StockOracle for InMemoryCatalog {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, OracleError> {
        let mut state = self.write();
        state.stock_lookups += 1;

        if state.fail_stock {
            return Err(OracleError::Unavailable("stock lookup disabled".to_string()));
        }

        state
            .stock
            .get(&product_id)
            .map(|&amount| Stock { amount })
            .ok_or(OracleError::NotFound(product_id))
    }
}

#[async_trait]
impl CatalogOracle for InMemoryCatalog {
    async fn product(&self, product_id: ProductId) -> Result<ProductInfo, OracleError> {
        let mut state = self.write();
        state.catalog_lookups += 1;

        if state.fail_catalog {
            return Err(OracleError::Unavailable("catalog lookup disabled".to_string()));
        }

        state
            .products
            .get(&product_id)
            .cloned()
            .ok_or(OracleError::NotFound(product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookups() {
        let catalog = InMemoryCatalog::new().with_product(ProductInfo::new(1, "Shoe", 100.0, "x"), 5);

        assert_eq!(catalog.stock(ProductId(1)).await.unwrap(), Stock { amount: 5 });
        assert_eq!(catalog.product(ProductId(1)).await.unwrap().name, "Shoe");
        assert!(matches!(
            catalog.stock(ProductId(2)).await,
            Err(OracleError::NotFound(ProductId(2)))
        ));
        assert_eq!(catalog.stock_lookups(), 2);
        assert_eq!(catalog.catalog_lookups(), 1);
    }

    #[tokio::test]
    async fn test_failure_switches() {
        let catalog = InMemoryCatalog::new().with_product(ProductInfo::new(1, "Shoe", 100.0, "x"), 5);

        catalog.set_fail_stock(true);
        assert!(catalog.stock(ProductId(1)).await.is_err());
        assert!(catalog.product(ProductId(1)).await.is_ok());

        catalog.set_fail_stock(false);
        catalog.set_fail_catalog(true);
        assert!(catalog.stock(ProductId(1)).await.is_ok());
        assert!(catalog.product(ProductId(1)).await.is_err());
    }

    #[tokio::test]
    async fn test_clones_share_stock() {
        let catalog = InMemoryCatalog::new().with_product(ProductInfo::new(1, "Shoe", 100.0, "x"), 5);
        let handle = catalog.clone();

        handle.set_stock(ProductId(1), 1);
        assert_eq!(catalog.stock(ProductId(1)).await.unwrap().amount, 1);
    }
}
