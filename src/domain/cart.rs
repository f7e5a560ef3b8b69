use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Product, ProductId};

/// The shopper's ordered selection of products.
///
/// Lines are unique by id and keep the order in which they were first added.
/// Mutating helpers never touch `self`; they return the updated cart so the
/// caller can commit it (or drop it) as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from persisted lines, rejecting duplicate ids and empty lines.
    pub fn from_items(items: Vec<Product>) -> Result<Self, String> {
        let cart = Self { items };
        cart.check_invariants()?;
        Ok(cart)
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Quantity held for `id`, 0 when absent.
    pub fn amount_of(&self, id: ProductId) -> u32 {
        self.find(id).map(|item| item.amount).unwrap_or(0)
    }

    /// Returns a copy with `product` appended, or `None` if a line with its id already exists.
    pub fn with_product(&self, product: Product) -> Option<Self> {
        if self.find(product.id).is_some() {
            return None;
        }
        let mut items = self.items.clone();
        items.push(product);
        Some(Self { items })
    }

    /// Returns a copy where the line for `id` holds `amount`, or `None` if the line is absent.
    pub fn with_amount(&self, id: ProductId, amount: u32) -> Option<Self> {
        let position = self.items.iter().position(|item| item.id == id)?;
        let mut items = self.items.clone();
        items[position].amount = amount;
        Some(Self { items })
    }

    /// Returns a copy without the line for `id`, or `None` if the line is absent.
    pub fn without(&self, id: ProductId) -> Option<Self> {
        let position = self.items.iter().position(|item| item.id == id)?;
        let mut items = self.items.clone();
        items.remove(position);
        Some(Self { items })
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.items.iter()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line amounts.
    pub fn total_amount(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.amount)).sum()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(Product::subtotal).sum()
    }

    fn check_invariants(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if item.amount == 0 {
                return Err(format!("product {} has amount 0", item.id));
            }
            if !seen.insert(item.id) {
                return Err(format!("product {} appears more than once", item.id));
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
