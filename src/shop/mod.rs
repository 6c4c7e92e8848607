//! Shop coordination layer
//!
//! This module ties the inventory structures together:
//! - [`engine`]: the [`Shop`] facade a front end dispatches to
//! - [`constants`]: seed products, recommendation edges and defaults
//!
//! # Reservations
//!
//! Adding to the cart and taking units out of stock are one operation,
//! [`Shop::reserve`]. It either succeeds completely or reports
//! [`ShopError::ProductNotFound`](crate::errors::ShopError::ProductNotFound) /
//! [`ShopError::InsufficientStock`](crate::errors::ShopError::InsufficientStock)
//! and changes nothing.

pub mod constants;
pub mod engine;

pub use engine::Shop;
