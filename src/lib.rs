//! # rocket-cart
//!
//! Shopping-cart state for a storefront client: add and remove products,
//! adjust quantities within available stock, and keep the cart across
//! restarts.
//!
//! ## Layout
//!
//! - **Domain** - [`Product`], [`Cart`] and the lookup payloads
//! - **Service** - [`CartService`] owns the cart and handles one request at a time
//! - **Client** - [`CartClient`] is the cloneable handle the UI layer talks to
//! - **Collaborators** - stock/catalog lookups ([`oracles`]), the durable slot
//!   ([`storage`]) and the shopper-facing [`Notifier`]
//! - **System** - [`CartSystem`] wires everything from [`CartConfig`] and shuts it down
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use rocket_cart::{CartConfig, CartSystem, ProductId, TracingNotifier};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CartConfig::from_env();
//! let system = CartSystem::start(&config, Arc::new(TracingNotifier))?;
//! let cart = system.cart_client();
//!
//! cart.add_product(ProductId(1)).await?;
//! let snapshot = cart.cart().await?;
//! println!("{} products in cart", snapshot.len());
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod app_system;
pub mod cart_service;
pub mod clients;
pub mod domain;
pub mod error;
pub mod messages;
pub mod notifications;
pub mod oracles;
pub mod storage;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, CartConfig, CartSystem};
pub use cart_service::{CartDependencies, CartService};
pub use clients::CartClient;
pub use domain::{Cart, Product, ProductId, ProductInfo, Stock, UpdateProductAmount};
pub use error::{CartError, ClientError, OracleError, StartupError, StorageError};
pub use notifications::{Notification, Notifier, TracingNotifier};
