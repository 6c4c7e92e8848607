//! Inventory data structures
//!
//! This module provides the containers the shop is built from:
//! - [`product`]: The [`Product`] value type
//! - [`catalog`]: Dynamic array of live products with sorting and searching
//! - [`cart`]: Owned singly-linked list of line items
//! - [`history`]: LIFO stack of viewed products
//! - [`orders`]: FIFO queue of submitted orders
//!
//! # Snapshots
//!
//! Only the [`catalog::Catalog`] holds live products. The cart, history and
//! order queue take a clone when a product is handed to them, so later stock or
//! field changes in the catalog are never visible through those copies.

pub mod cart;
pub mod catalog;
pub mod history;
pub mod orders;
pub mod product;

pub use cart::{Cart, CartSummary, LineItem};
pub use catalog::Catalog;
pub use history::ViewHistory;
pub use orders::OrderQueue;
pub use product::{Product, ProductId};
