//! Shopping cart as an owned singly-linked list
//!
//! This module provides:
//! - [`Cart`]: the list head and length
//! - [`LineItem`]: a product snapshot with a quantity
//! - [`CartSummary`]: line items plus their total, produced by traversal
//!
//! # Ownership
//!
//! Each node is a `Box` owned by the link before it, so the head owns the whole
//! chain. Removing a node moves it out of its link and the predecessor takes
//! the successor; the removed box is released immediately. Clearing releases
//! nodes one at a time from head to tail, never recursively.
//!
//! The cart never looks at the catalog. Checking stock and decrementing it are
//! the caller's job (see [`crate::shop::engine::Shop::reserve`]).

use super::product::{Product, ProductId};
use crate::errors::ShopError;
use std::fmt;
use tracing::debug;

/// One cart entry
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product: Product,
    pub quantity: u32,
}

impl LineItem {
    /// Price multiplied by quantity
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Line items in cart order with their combined total
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub items: Vec<LineItem>,
    pub total: f64,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

struct CartNode {
    item: LineItem,
    next: Option<Box<CartNode>>,
}

/// The shopping cart
pub struct Cart {
    head: Option<Box<CartNode>>,
    len: usize,
}

impl Cart {
    pub fn new() -> Self {
        Cart { head: None, len: 0 }
    }

    /// Append a snapshot of `product` at the tail
    pub fn add(&mut self, product: &Product, quantity: u32) {
        let node = Box::new(CartNode {
            item: LineItem {
                product: product.clone(),
                quantity,
            },
            next: None,
        });

        let mut cursor = &mut self.head;
        while let Some(existing) = cursor {
            cursor = &mut existing.next;
        }
        *cursor = Some(node);
        self.len += 1;
        debug!(id = product.id, quantity, "cart add");
    }

    /// Unlink and return the first line holding this product id
    pub fn remove(&mut self, id: ProductId) -> Result<LineItem, ShopError> {
        let position = self
            .iter()
            .position(|item| item.product.id == id)
            .ok_or(ShopError::NotInCart { id })?;

        // Walk to the link that owns the matching node
        let mut cursor = &mut self.head;
        for _ in 0..position {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => break,
            }
        }

        let mut removed = cursor.take().ok_or(ShopError::NotInCart { id })?;
        *cursor = removed.next.take();
        self.len -= 1;
        debug!(id, "cart remove");
        Ok(removed.item)
    }

    /// Overwrite the quantity of the first line holding this product id
    ///
    /// No check against catalog stock is made.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) -> Result<(), ShopError> {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.item.product.id == id {
                node.item.quantity = quantity;
                debug!(id, quantity, "cart quantity updated");
                return Ok(());
            }
            cursor = node.next.as_deref_mut();
        }
        Err(ShopError::NotInCart { id })
    }

    /// Sum of quantity times price over every line; `0.0` when empty
    pub fn total(&self) -> f64 {
        // `Sum` for f64 starts from -0.0, which would print as "-0.00"
        self.iter().fold(0.0, |acc, item| acc + item.subtotal())
    }

    /// Copy out every line with the total
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items: self.iter().cloned().collect(),
            total: self.total(),
        }
    }

    /// Release every node, head first
    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.len = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Iterate line items in insertion order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Cart {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over cart lines
pub struct Iter<'a> {
    next: Option<&'a CartNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a LineItem;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.item
        })
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
