//! Stock and catalog lookups against the storefront REST API.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::{CatalogOracle, StockOracle};
use crate::domain::{ProductId, ProductInfo, Stock};
use crate::error::OracleError;

/// Client for `GET {base}/stock/{id}` and `GET {base}/products/{id}`.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, OracleError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, OracleError> {
        debug!(%url, "Sending lookup");
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| OracleError::Decode(e.to_string()))
    }
}

#[async_trait]
impl StockOracle for HttpCatalog {
    #[instrument(fields(product_id = %product_id), skip(self))]
    async fn stock(&self, product_id: ProductId) -> Result<Stock, OracleError> {
        self.get_json(format!("{}/stock/{}", self.base_url, product_id)).await
    }
}

#[async_trait]
impl CatalogOracle for HttpCatalog {
    #[instrument(fields(product_id = %product_id), skip(self))]
    async fn product(&self, product_id: ProductId) -> Result<ProductInfo, OracleError> {
        self.get_json(format!("{}/products/{}", self.base_url, product_id)).await
    }
}
