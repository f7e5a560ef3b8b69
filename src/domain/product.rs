use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A line item held in the cart.
///
/// `amount` is the quantity the shopper holds, not catalog stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image_url: String,
    pub amount: u32,
}

impl Product {
    /// Builds a cart line from catalog metadata.
    pub fn from_info(info: ProductInfo, amount: u32) -> Self {
        Self {
            id: info.id,
            name: info.name,
            price: info.price,
            image_url: info.image_url,
            amount,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.amount)
    }
}

/// Display metadata returned by the catalog lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image_url: String,
}

impl ProductInfo {
    pub fn new(id: u64, name: impl Into<String>, price: f64, image_url: impl Into<String>) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price,
            image_url: image_url.into(),
        }
    }
}

/// Available quantity reported by the stock lookup.
///
/// Signed because stock services report oversold products with a negative
/// amount; anything below 1 means nothing can be added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub amount: i64,
}

impl Stock {
    /// Whether `requested` units can be held in the cart.
    pub fn covers(&self, requested: u32) -> bool {
        self.amount >= i64::from(requested)
    }
}

/// Payload for setting the quantity of a cart line.
///
/// `amount` is signed so that non-positive requests coming from the UI can be
/// ignored rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}
