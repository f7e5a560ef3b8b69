//! The cart service: owns the cart and processes one request at a time.
//!
//! Every mutating handler follows the same shape: compute an updated copy of
//! the cart from the current snapshot, persist it, and only then replace the
//! in-memory cart. Any failure along the way leaves both untouched and is
//! reported through the [`Notifier`].

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use crate::clients::CartClient;
use crate::domain::{Cart, Product, ProductId, Stock, UpdateProductAmount};
use crate::error::{CartError, CartOperation, OracleError};
use crate::messages::{CartRequest, ServiceResponse};
use crate::notifications::Notifier;
use crate::oracles::{CatalogOracle, StockOracle};
use crate::storage::{load_cart, save_cart, CartStorage};

/// Collaborators the service is wired with.
#[derive(Clone)]
pub struct CartDependencies {
    pub stock: Arc<dyn StockOracle>,
    pub catalog: Arc<dyn CatalogOracle>,
    pub storage: Arc<dyn CartStorage>,
    pub storage_key: String,
    pub notifier: Arc<dyn Notifier>,
}

pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    cart: Cart,
    stock: Arc<dyn StockOracle>,
    catalog: Arc<dyn CatalogOracle>,
    storage: Arc<dyn CartStorage>,
    storage_key: String,
    notifier: Arc<dyn Notifier>,
}

impl CartService {
    /// Creates the service with the cart restored from storage.
    pub fn new(buffer_size: usize, deps: CartDependencies) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let cart = restore_cart(deps.storage.as_ref(), &deps.storage_key);
        let service = Self {
            receiver,
            cart,
            stock: deps.stock,
            catalog: deps.catalog,
            storage: deps.storage,
            storage_key: deps.storage_key,
            notifier: deps.notifier,
        };
        let client = CartClient::new(sender);
        (service, client)
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!(items = self.cart.len(), "CartService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::GetCart { respond_to } => {
                    let _ = respond_to.send(self.cart.clone());
                }
                CartRequest::AddProduct {
                    product_id,
                    respond_to,
                } => {
                    self.handle_add_product(product_id, respond_to).await;
                }
                CartRequest::RemoveProduct {
                    product_id,
                    respond_to,
                } => {
                    self.handle_remove_product(product_id, respond_to);
                }
                CartRequest::UpdateProductAmount { update, respond_to } => {
                    self.handle_update_product_amount(update, respond_to).await;
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
            }
        }

        info!("CartService stopped");
    }

    #[instrument(fields(product_id = %product_id), skip(self, respond_to))]
    async fn handle_add_product(&mut self, product_id: ProductId, respond_to: ServiceResponse<Cart>) {
        debug!("Processing add_product request");

        let result = self.add_product(product_id).await;
        self.finish(CartOperation::Add, result);

        let _ = respond_to.send(self.cart.clone());
    }

    async fn add_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let requested = self.cart.amount_of(product_id).saturating_add(1);

        let stock = self.stock.stock(product_id).await?;
        ensure_in_stock(product_id, requested, stock)?;

        let updated = match self.cart.with_amount(product_id, requested) {
            Some(updated) => updated,
            None => {
                let info = self.catalog.product(product_id).await?;
                if info.id != product_id {
                    return Err(OracleError::Decode(format!(
                        "catalog answered product {} for product {}",
                        info.id, product_id
                    ))
                    .into());
                }
                info!(product_name = %info.name, "Adding new product to cart");
                self.cart
                    .with_product(Product::from_info(info, 1))
                    .ok_or_else(|| OracleError::Decode(format!("product {} already in cart", product_id)))?
            }
        };

        self.persist(&updated)?;
        Ok(updated)
    }

    /// **Sync Handler** - no lookups needed to drop a line.
    #[instrument(fields(product_id = %product_id), skip(self, respond_to))]
    fn handle_remove_product(&mut self, product_id: ProductId, respond_to: ServiceResponse<Cart>) {
        debug!("Processing remove_product request");

        let result = self.remove_product(product_id);
        self.finish(CartOperation::Remove, result);

        let _ = respond_to.send(self.cart.clone());
    }

    fn remove_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let updated = self
            .cart
            .without(product_id)
            .ok_or(CartError::NotInCart(product_id))?;

        self.persist(&updated)?;
        Ok(updated)
    }

    #[instrument(fields(product_id = %update.product_id, amount = update.amount), skip(self, respond_to))]
    async fn handle_update_product_amount(
        &mut self,
        update: UpdateProductAmount,
        respond_to: ServiceResponse<Cart>,
    ) {
        debug!("Processing update_product_amount request");

        if update.amount <= 0 {
            debug!("Ignoring non-positive amount");
            let _ = respond_to.send(self.cart.clone());
            return;
        }

        let result = self.update_product_amount(update).await;
        self.finish(CartOperation::UpdateAmount, result);

        let _ = respond_to.send(self.cart.clone());
    }

    async fn update_product_amount(&self, update: UpdateProductAmount) -> Result<Cart, CartError> {
        let product_id = update.product_id;
        let requested = u32::try_from(update.amount).unwrap_or(u32::MAX);

        let stock = self.stock.stock(product_id).await?;
        ensure_in_stock(product_id, requested, stock)?;

        let updated = self
            .cart
            .with_amount(product_id, requested)
            .ok_or(CartError::NotInCart(product_id))?;

        self.persist(&updated)?;
        Ok(updated)
    }

    fn persist(&self, cart: &Cart) -> Result<(), CartError> {
        save_cart(self.storage.as_ref(), &self.storage_key, cart)?;
        Ok(())
    }

    /// Commits a successful result or reports the failure; never both.
    fn finish(&mut self, operation: CartOperation, result: Result<Cart, CartError>) {
        match result {
            Ok(cart) => {
                self.cart = cart;
                info!(
                    items = self.cart.len(),
                    total_amount = self.cart.total_amount(),
                    "Cart committed"
                );
            }
            Err(e) => {
                let notification = e.notification(operation);
                match &e {
                    CartError::OutOfStock { .. } | CartError::NotInCart(_) => {
                        warn!(error = %e, ?operation, "Cart operation rejected")
                    }
                    CartError::Lookup(_) | CartError::Storage(_) => {
                        error!(error = %e, ?operation, "Cart operation failed")
                    }
                }
                self.notifier.notify(notification);
            }
        }
    }
}

fn ensure_in_stock(product_id: ProductId, requested: u32, stock: Stock) -> Result<(), CartError> {
    if !stock.covers(requested) {
        return Err(CartError::OutOfStock {
            product_id,
            requested,
            available: stock.amount,
        });
    }
    Ok(())
}

/// Reads the persisted cart, falling back to an empty one when it is missing or unreadable.
fn restore_cart(storage: &dyn CartStorage, key: &str) -> Cart {
    match load_cart(storage, key) {
        Ok(Some(cart)) => {
            info!(items = cart.len(), "Restored persisted cart");
            cart
        }
        Ok(None) => {
            debug!("No persisted cart, starting empty");
            Cart::new()
        }
        Err(e) => {
            warn!(error = %e, "Persisted cart unreadable, starting empty");
            Cart::new()
        }
    }
}
