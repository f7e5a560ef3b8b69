//! Durable key-value slot the cart is mirrored to.
//!
//! Backends store raw strings; JSON encoding of the cart lives in
//! [`load_cart`] and [`save_cart`].

pub mod file;
pub mod memory;

use crate::domain::{Cart, Product};
use crate::error::StorageError;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key the cart is persisted under unless configured otherwise.
pub const DEFAULT_CART_KEY: &str = "cart";

/// String storage surviving process restarts.
///
/// Calls run inline on the cart service task and hold up every queued
/// request until they return, so backends must be fast and must not block
/// on the network. A small local file or an in-process map qualifies.
pub trait CartStorage: Send + Sync {
    /// Reads the value under `key`, `None` if it was never written.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites the value under `key`.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Reads and validates the persisted cart.
pub fn load_cart(storage: &dyn CartStorage, key: &str) -> Result<Option<Cart>, StorageError> {
    let Some(raw) = storage.load(key)? else {
        return Ok(None);
    };
    let items: Vec<Product> = serde_json::from_str(&raw)?;
    let cart = Cart::from_items(items).map_err(StorageError::InvalidCart)?;
    Ok(Some(cart))
}

/// Writes the full cart, replacing whatever was stored before.
pub fn save_cart(storage: &dyn CartStorage, key: &str, cart: &Cart) -> Result<(), StorageError> {
    let raw = serde_json::to_string(cart)?;
    storage.save(key, &raw)
}
