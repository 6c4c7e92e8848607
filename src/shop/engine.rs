//! Shop engine
//!
//! [`Shop`] owns one of each inventory structure plus the recommendation graph
//! and exposes the operations a front end dispatches to. It is where actions
//! that touch more than one structure live:
//!
//! - [`Shop::view_product`]: catalog lookup, then a snapshot onto the history
//! - [`Shop::reserve`]: stock check, cart append and stock decrement as one step
//! - [`Shop::checkout`]: cart lines become orders, then the cart is cleared
//!
//! Every other method forwards to a single structure.

use super::constants::{SEED_PRODUCTS, SEED_RECOMMENDATIONS};
use crate::errors::ShopError;
use crate::inventory::{
    Cart, CartSummary, Catalog, LineItem, OrderQueue, Product, ProductId, ViewHistory,
};
use crate::recommend::RecommendationGraph;
use crate::timing::TimingSink;
use std::time::Duration;
use tracing::{debug, info};

/// The shop state
#[derive(Debug)]
pub struct Shop {
    catalog: Catalog,
    cart: Cart,
    history: ViewHistory,
    orders: OrderQueue,
    graph: RecommendationGraph,
}

impl Shop {
    /// Create a shop from a prepared catalog and graph
    pub fn new(catalog: Catalog, graph: RecommendationGraph) -> Self {
        Shop {
            catalog,
            cart: Cart::new(),
            history: ViewHistory::new(),
            orders: OrderQueue::new(),
            graph,
        }
    }

    /// Create a shop holding the built-in products and recommendation edges
    ///
    /// Every seeded product's name is registered in the graph.
    pub fn seeded(timing: Box<dyn TimingSink>) -> Self {
        let mut catalog = Catalog::with_sink(timing);
        for &(id, name, price, stock) in SEED_PRODUCTS {
            catalog.add(Product::new(id, name, price, stock));
        }

        let mut graph = RecommendationGraph::new();
        for product in catalog.products() {
            graph.add_product_name(product.id, product.name.clone());
        }
        for &(from, to) in SEED_RECOMMENDATIONS {
            graph.add_edge(from, to);
        }

        info!(
            products = catalog.len(),
            edges = SEED_RECOMMENDATIONS.len(),
            "shop seeded"
        );
        Shop::new(catalog, graph)
    }

    /// Look up a product and push a snapshot onto the view history
    pub fn view_product(&mut self, id: ProductId) -> Result<Product, ShopError> {
        let product = self
            .catalog
            .find_by_id(id)
            .cloned()
            .ok_or(ShopError::ProductNotFound { id })?;
        self.history.record(&product);
        Ok(product)
    }

    /// Put `quantity` units of a product into the cart, taking them from stock
    ///
    /// On failure neither the cart nor the catalog changes. The cart line holds
    /// the product as it was before the stock decrement.
    pub fn reserve(&mut self, id: ProductId, quantity: u32) -> Result<LineItem, ShopError> {
        let product = self
            .catalog
            .find_by_id(id)
            .ok_or(ShopError::ProductNotFound { id })?;

        if !product.has_stock(quantity) {
            return Err(ShopError::InsufficientStock {
                id,
                requested: quantity,
                available: product.stock,
            });
        }

        let snapshot = product.clone();
        self.cart.add(&snapshot, quantity);
        self.catalog.update_stock(id, quantity);
        debug!(id, quantity, "reserved");

        Ok(LineItem {
            product: snapshot,
            quantity,
        })
    }

    /// Remove the first cart line for a product
    pub fn remove_from_cart(&mut self, id: ProductId) -> Result<LineItem, ShopError> {
        self.cart.remove(id)
    }

    /// Overwrite the quantity of the first cart line for a product
    pub fn update_cart_quantity(&mut self, id: ProductId, quantity: u32) -> Result<(), ShopError> {
        self.cart.update_quantity(id, quantity)
    }

    pub fn cart_summary(&self) -> CartSummary {
        self.cart.summary()
    }

    /// Submit every cart line as an order and empty the cart
    ///
    /// Returns the cart contents as they were at checkout.
    pub fn checkout(&mut self) -> Result<CartSummary, ShopError> {
        if self.cart.is_empty() {
            return Err(ShopError::CartEmpty);
        }

        let summary = self.cart.summary();
        for item in &summary.items {
            self.orders.submit(&item.product);
        }
        self.cart.clear();

        info!(
            lines = summary.items.len(),
            total = summary.total,
            "checked out"
        );
        Ok(summary)
    }

    /// Drain the order queue in submission order
    pub fn process_orders(&mut self) -> Vec<Product> {
        self.orders.process_all()
    }

    /// Viewed products, most recent first
    pub fn recently_viewed(&self) -> Vec<Product> {
        self.history.iter().cloned().collect()
    }

    /// Names reachable from a product in the recommendation graph
    pub fn recommendations(&self, id: ProductId) -> Result<Vec<String>, ShopError> {
        self.graph.recommend(id)
    }

    /// Remove every catalog entry with this id
    pub fn remove_product(&mut self, id: ProductId) -> Result<(), ShopError> {
        if self.catalog.remove(id) {
            Ok(())
        } else {
            Err(ShopError::ProductNotFound { id })
        }
    }

    /// Replace name, price and stock of a catalog entry
    pub fn update_product(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        stock: u32,
    ) -> Result<(), ShopError> {
        self.catalog.update_fields(id, name, price, stock)
    }

    pub fn sort_by_name(&mut self) -> Duration {
        self.catalog.sort_by_name()
    }

    pub fn sort_by_price(&mut self) {
        self.catalog.sort_by_price();
    }

    pub fn sort_by_id(&mut self) {
        self.catalog.sort_by_id();
    }

    /// Binary search by id; the catalog must already be sorted by id
    pub fn search(&self, id: ProductId) -> Result<(usize, Product), ShopError> {
        self.catalog
            .binary_search(id)
            .and_then(|index| self.catalog.get(index).map(|p| (index, p.clone())))
            .ok_or(ShopError::ProductNotFound { id })
    }

    /// Linear search by id; works in any order
    pub fn find(&self, id: ProductId) -> Result<(usize, Product), ShopError> {
        self.catalog
            .linear_search(id)
            .and_then(|index| self.catalog.get(index).map(|p| (index, p.clone())))
            .ok_or(ShopError::ProductNotFound { id })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn history(&self) -> &ViewHistory {
        &self.history
    }

    pub fn orders(&self) -> &OrderQueue {
        &self.orders
    }

    pub fn graph(&self) -> &RecommendationGraph {
        &self.graph
    }
}

impl Default for Shop {
    fn default() -> Self {
        Shop::new(Catalog::new(), RecommendationGraph::new())
    }
}
