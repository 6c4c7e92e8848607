//! Error types for shop operations
//!
//! This module defines [`ShopError`], the outcome reported when a requested
//! entity is absent or a reservation cannot be satisfied.
//!
//! No shop error is fatal. Every variant is a neutral report and the operation
//! that produced it leaves all state untouched.

use crate::inventory::ProductId;
use thiserror::Error;

/// Non-fatal failures reported by catalog, cart, graph and shop operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    /// No catalog entry carries this id
    #[error("Product {id} not found")]
    ProductNotFound { id: ProductId },

    /// No cart line holds a product with this id
    #[error("Product {id} not found in cart")]
    NotInCart { id: ProductId },

    /// The recommendation graph has no name registered for this id
    #[error("Product ID {id} not found for recommendations")]
    NotInGraph { id: ProductId },

    /// The catalog holds fewer units than requested
    #[error("Insufficient stock for product {id}: requested {requested}, available {available}")]
    InsufficientStock {
        id: ProductId,
        requested: u32,
        available: u32,
    },

    /// Checkout was attempted with nothing in the cart
    #[error("Cart is empty")]
    CartEmpty,
}

impl ShopError {
    /// The product id the error refers to, if any
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            ShopError::ProductNotFound { id } => Some(*id),
            ShopError::NotInCart { id } => Some(*id),
            ShopError::NotInGraph { id } => Some(*id),
            ShopError::InsufficientStock { id, .. } => Some(*id),
            ShopError::CartEmpty => None,
        }
    }

    /// Whether this is one of the absence reports
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ShopError::ProductNotFound { .. }
                | ShopError::NotInCart { .. }
                | ShopError::NotInGraph { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_of_each_variant() {
        assert_eq!(ShopError::ProductNotFound { id: 3 }.product_id(), Some(3));
        assert_eq!(ShopError::NotInCart { id: 4 }.product_id(), Some(4));
        assert_eq!(ShopError::NotInGraph { id: 5 }.product_id(), Some(5));
        let short = ShopError::InsufficientStock {
            id: 6,
            requested: 2,
            available: 1,
        };
        assert_eq!(short.product_id(), Some(6));
        assert_eq!(ShopError::CartEmpty.product_id(), None);
    }

    #[test]
    fn stock_shortage_is_not_an_absence() {
        let short = ShopError::InsufficientStock {
            id: 1,
            requested: 11,
            available: 10,
        };
        assert!(!short.is_not_found());
        assert!(ShopError::NotInGraph { id: 1 }.is_not_found());
    }
}
