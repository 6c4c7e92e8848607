//! Recently viewed products
//!
//! [`ViewHistory`] is a LIFO stack of product snapshots. Entries are only ever
//! pushed; reading walks the stack from the top without popping.

use super::product::Product;

/// Stack of viewed product snapshots
#[derive(Debug, Clone, Default)]
pub struct ViewHistory {
    viewed: Vec<Product>,
}

impl ViewHistory {
    pub fn new() -> Self {
        ViewHistory { viewed: Vec::new() }
    }

    /// Push a snapshot of `product`
    pub fn record(&mut self, product: &Product) {
        self.viewed.push(product.clone());
    }

    /// Most recently viewed first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Product> + '_ {
        self.viewed.iter().rev()
    }

    /// The last product viewed
    pub fn latest(&self) -> Option<&Product> {
        self.viewed.last()
    }

    pub fn len(&self) -> usize {
        self.viewed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.viewed.is_empty()
    }
}
