//! The product value type
//!
//! A [`Product`] is plain data. The catalog owns the live instances; everything
//! else (cart lines, view history, order queue) stores a clone taken at the
//! moment of copying, so later catalog edits never reach those snapshots.

use std::fmt;

/// Caller-assigned product identifier
pub type ProductId = i32;

/// A catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, stock: u32) -> Self {
        Product {
            id,
            name: name.into(),
            price,
            stock,
        }
    }

    /// Decrease stock by `delta`, stopping at zero
    pub fn take_stock(&mut self, delta: u32) {
        self.stock = self.stock.saturating_sub(delta);
    }

    /// Check whether `quantity` units can be taken from stock
    pub fn has_stock(&self, quantity: u32) -> bool {
        self.stock >= quantity
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let price = format!("{:.2}", self.price);
        write!(
            f,
            "{:<6}{:<25}${:<10}Stock: {}",
            self.id, self.name, price, self.stock
        )
    }
}
