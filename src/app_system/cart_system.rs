use std::sync::Arc;

use tracing::{error, info, instrument};

use super::CartConfig;
use crate::cart_service::{CartDependencies, CartService};
use crate::clients::CartClient;
use crate::error::{ClientError, StartupError};
use crate::notifications::Notifier;
use crate::oracles::HttpCatalog;
use crate::storage::FileStorage;

/// Owns the running cart service and hands out clients to it.
///
/// **Responsibilities:**
/// - build collaborators from [`CartConfig`] (HTTP lookups, file-backed slot)
/// - spawn the service and keep its task handle
/// - stop the service and wait for it on shutdown
pub struct CartSystem {
    cart_client: CartClient,
    handle: tokio::task::JoinHandle<()>,
}

impl CartSystem {
    /// Starts a cart backed by the storefront API and a file slot, as configured.
    #[instrument(name = "cart_system", skip_all, fields(api_url = %config.api_url))]
    pub fn start(config: &CartConfig, notifier: Arc<dyn Notifier>) -> Result<Self, StartupError> {
        let lookups = Arc::new(HttpCatalog::new(config.api_url.clone(), config.request_timeout)?);
        let storage = Arc::new(FileStorage::open(&config.storage_dir)?);

        let deps = CartDependencies {
            stock: lookups.clone(),
            catalog: lookups,
            storage,
            storage_key: config.storage_key.clone(),
            notifier,
        };
        Ok(Self::with_dependencies(config.buffer_size, deps))
    }

    /// Starts a cart with explicitly supplied collaborators.
    pub fn with_dependencies(buffer_size: usize, deps: CartDependencies) -> Self {
        info!("Starting cart system");

        let (service, cart_client) = CartService::new(buffer_size, deps);
        let handle = tokio::spawn(service.run());

        info!("Cart system started");
        Self { cart_client, handle }
    }

    /// The shared cart; every clone talks to the same service.
    pub fn cart_client(&self) -> CartClient {
        self.cart_client.clone()
    }

    /// Stops the service once queued requests are done and waits for it.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), ClientError> {
        info!("Shutting down cart system");

        // Already stopped is fine; the join below reports real failures.
        let _ = self.cart_client.shutdown().await;

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Cart service task failed");
            return Err(ClientError::ServiceFailed(e.to_string()));
        }

        info!("Cart system shutdown complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_framework::RecordingNotifier;
    use crate::storage::{load_cart, CartStorage};

    #[tokio::test]
    async fn test_start_from_config_creates_storage_dir() -> Result<(), Box<dyn std::error::Error>> {
        let dir = std::env::temp_dir().join(format!("rocket-cart-{}", uuid::Uuid::new_v4()));
        let config = CartConfig {
            storage_dir: dir.clone(),
            ..CartConfig::default()
        };

        let system = CartSystem::start(&config, Arc::new(RecordingNotifier::new()))?;
        assert!(dir.is_dir());
        assert!(system.cart_client().cart().await?.is_empty());

        system.shutdown().await?;
        std::fs::remove_dir_all(dir)?;
        Ok(())
    }

    #[tokio::test]
    async fn test_file_slot_survives_restart() -> Result<(), Box<dyn std::error::Error>> {
        use crate::domain::{ProductId, ProductInfo};
        use crate::oracles::InMemoryCatalog;

        let dir = std::env::temp_dir().join(format!("rocket-cart-{}", uuid::Uuid::new_v4()));
        let catalog = InMemoryCatalog::new().with_product(ProductInfo::new(1, "Shoe", 100.0, "x"), 5);
        let storage = Arc::new(FileStorage::open(&dir)?);
        let deps = CartDependencies {
            stock: Arc::new(catalog.clone()),
            catalog: Arc::new(catalog),
            storage: storage.clone(),
            storage_key: "cart".to_string(),
            notifier: Arc::new(RecordingNotifier::new()),
        };

        let system = CartSystem::with_dependencies(8, deps.clone());
        system.cart_client().add_product(ProductId(1)).await?;
        system.cart_client().add_product(ProductId(1)).await?;
        system.shutdown().await?;

        let restarted = CartSystem::with_dependencies(8, deps);
        let cart = restarted.cart_client().cart().await?;
        assert_eq!(cart.amount_of(ProductId(1)), 2);
        assert_eq!(load_cart(storage.as_ref() as &dyn CartStorage, "cart")?, Some(cart));

        restarted.shutdown().await?;
        std::fs::remove_dir_all(dir)?;
        Ok(())
    }
}
