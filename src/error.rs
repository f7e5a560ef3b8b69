use thiserror::Error;

use crate::domain::ProductId;
use crate::notifications::Notification;

/// Failures of the remote stock and catalog lookups.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("Lookup transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Lookup returned status {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Lookup response could not be decoded: {0}")]
    Decode(String),
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Lookup service unavailable: {0}")]
    Unavailable(String),
}

/// Failures of the durable cart slot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Persisted cart is invalid: {0}")]
    InvalidCart(String),
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Why a cart operation was rejected.
///
/// Never returned to callers; the service turns it into a [`Notification`].
#[derive(Debug, Error)]
pub enum CartError {
    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: u32,
        available: i64,
    },
    #[error("Product not in cart: {0}")]
    NotInCart(ProductId),
    #[error("Lookup failed: {0}")]
    Lookup(#[from] OracleError),
    #[error("Persisting cart failed: {0}")]
    Storage(#[from] StorageError),
}

/// The cart operation an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    UpdateAmount,
}

impl CartError {
    /// The single message shown to the shopper for this failure.
    pub fn notification(&self, operation: CartOperation) -> Notification {
        match (self, operation) {
            (CartError::OutOfStock { .. }, _) => Notification::OutOfStock,
            (_, CartOperation::Add) => Notification::AdditionFailed,
            (_, CartOperation::Remove) => Notification::RemovalFailed,
            (_, CartOperation::UpdateAmount) => Notification::QuantityUpdateFailed,
        }
    }
}

/// Errors a [`CartClient`](crate::clients::CartClient) can observe: the service task is gone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Cart service closed: {0}")]
    ServiceClosed(String),
    #[error("Cart service dropped the request: {0}")]
    ServiceDropped(String),
    #[error("Cart service task failed: {0}")]
    ServiceFailed(String),
}

/// Errors building the cart system from configuration.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to create lookup client: {0}")]
    Oracle(#[from] OracleError),
    #[error("Failed to open cart storage: {0}")]
    Storage(#[from] StorageError),
}
