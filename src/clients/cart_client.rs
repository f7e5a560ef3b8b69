use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::{Cart, ProductId, UpdateProductAmount};
use crate::error::ClientError;
use crate::messages::CartRequest;

/// Handle to the cart service.
///
/// Cheap to clone; every clone talks to the same cart. Mutating methods
/// return the cart as it stands once the request was processed. A rejected
/// operation is reported to the shopper through the configured notifier and
/// simply returns the unchanged cart.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    /// Asks the service to stop after the requests already queued.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), ClientError> {
        debug!("Sending shutdown request");
        self.sender
            .send(CartRequest::Shutdown)
            .await
            .map_err(|e| ClientError::ServiceClosed(e.to_string()))?;
        Ok(())
    }
}

client_method!(
    /// Current cart snapshot.
    CartClient => fn cart() -> Cart as CartRequest::GetCart
);
client_method!(
    /// Adds one unit of `product_id`, fetching its metadata on first add.
    CartClient => fn add_product(product_id: ProductId) -> Cart as CartRequest::AddProduct
);
client_method!(
    /// Drops the line for `product_id`.
    CartClient => fn remove_product(product_id: ProductId) -> Cart as CartRequest::RemoveProduct
);
client_method!(
    /// Sets the quantity of a line already in the cart. Non-positive amounts are ignored.
    CartClient => fn update_product_amount(update: UpdateProductAmount) -> Cart as CartRequest::UpdateProductAmount
);
