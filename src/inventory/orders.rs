//! Order processing queue
//!
//! [`OrderQueue`] holds product snapshots in submission order. Processing is
//! all-or-nothing: [`OrderQueue::process_all`] drains every pending order and
//! nothing about processed orders is kept.

use super::product::Product;
use std::collections::VecDeque;
use tracing::info;

/// FIFO queue of submitted orders
#[derive(Debug, Clone, Default)]
pub struct OrderQueue {
    orders: VecDeque<Product>,
}

impl OrderQueue {
    pub fn new() -> Self {
        OrderQueue {
            orders: VecDeque::new(),
        }
    }

    /// Enqueue a snapshot of `product`
    pub fn submit(&mut self, product: &Product) {
        self.orders.push_back(product.clone());
    }

    /// Dequeue every pending order, oldest first
    pub fn process_all(&mut self) -> Vec<Product> {
        let mut processed = Vec::with_capacity(self.orders.len());
        while let Some(order) = self.orders.pop_front() {
            info!(id = order.id, name = %order.name, "order processed");
            processed.push(order);
        }
        processed
    }

    /// Pending orders, oldest first
    pub fn pending(&self) -> impl Iterator<Item = &Product> + '_ {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
