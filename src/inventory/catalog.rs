//! Catalog implementation
//!
//! The catalog is a dynamic array of [`Product`] records and the only owner of
//! live product data. It provides:
//! - Lookup and linear/binary search by id
//! - Stock and field updates, removal of every entry sharing an id
//! - Bubble sort by name (timed) and quicksort by price
//!
//! # Duplicate Ids
//!
//! [`Catalog::add`] never checks for an existing id. Lookups and updates act
//! on the first match, while [`Catalog::remove`] purges every match.
//!
//! # Binary Search
//!
//! [`Catalog::binary_search`] assumes the products are in ascending id order.
//! Nothing verifies this; on unsorted data the result may be wrong or missing,
//! but the search always terminates without panicking. Call
//! [`Catalog::sort_by_id`] first, or check [`Catalog::is_sorted_by_id`].

use super::product::{Product, ProductId};
use crate::errors::ShopError;
use crate::timing::{NoopSink, TimingSink};
use std::cmp::Ordering;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// Prefix of the line written to the timing sink after a name sort
pub const NAME_SORT_TIMING_PREFIX: &str = "Bubble sort by name time (microseconds): ";

/// The product catalog
pub struct Catalog {
    products: Vec<Product>,
    timing: Box<dyn TimingSink>,
}

impl Catalog {
    /// Create an empty catalog that discards timing lines
    pub fn new() -> Self {
        Self::with_sink(Box::new(NoopSink))
    }

    /// Create an empty catalog reporting sort timings to `timing`
    pub fn with_sink(timing: Box<dyn TimingSink>) -> Self {
        Catalog {
            products: Vec::new(),
            timing,
        }
    }

    /// Append a product (no uniqueness check)
    pub fn add(&mut self, product: Product) {
        debug!(id = product.id, name = %product.name, "catalog add");
        self.products.push(product);
    }

    /// Number of entries, duplicates included
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All entries in current order (for UI display)
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Get the entry at a position
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Get the first entry with this id
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.linear_search(id).map(|index| &self.products[index])
    }

    /// Get a mutable reference to the first entry with this id
    pub fn find_by_id_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Decrease stock of the first entry with this id, clamping at zero
    ///
    /// Does nothing when the id is absent.
    pub fn update_stock(&mut self, id: ProductId, delta: u32) {
        if let Some(product) = self.find_by_id_mut(id) {
            product.take_stock(delta);
            debug!(id, delta, stock = product.stock, "stock updated");
        }
    }

    /// Replace name, price and stock of the first entry with this id
    pub fn update_fields(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        stock: u32,
    ) -> Result<(), ShopError> {
        let product = self
            .find_by_id_mut(id)
            .ok_or(ShopError::ProductNotFound { id })?;
        product.name = name.into();
        product.price = price;
        product.stock = stock;
        debug!(id, "product fields updated");
        Ok(())
    }

    /// Remove every entry with this id, returning whether any was removed
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        let removed = before - self.products.len();
        debug!(id, removed, "catalog remove");
        removed > 0
    }

    /// Sort by name with an adjacent-swap bubble sort
    ///
    /// Stable: only strictly out-of-order neighbours are swapped. Passes stop
    /// once a full pass makes no swap. The elapsed time is written to the
    /// timing sink and returned.
    pub fn sort_by_name(&mut self) -> Duration {
        let start = Instant::now();

        let n = self.products.len();
        for pass in 0..n.saturating_sub(1) {
            let mut swapped = false;
            for j in 0..n - pass - 1 {
                if self.products[j].name > self.products[j + 1].name {
                    self.products.swap(j, j + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }

        let elapsed = start.elapsed();
        self.timing.record(&format!(
            "{}{}",
            NAME_SORT_TIMING_PREFIX,
            elapsed.as_micros()
        ));
        debug!(micros = elapsed.as_micros() as u64, "sorted by name");
        elapsed
    }

    /// Sort the whole catalog by ascending price
    pub fn sort_by_price(&mut self) {
        if let Some(last) = self.products.len().checked_sub(1) {
            self.sort_by_price_range(0, last);
        }
    }

    /// Quicksort the inclusive index range `low..=high` by ascending price
    ///
    /// Uses the last element of each range as pivot. Not stable. A `high`
    /// beyond the end is clamped to the last index.
    pub fn sort_by_price_range(&mut self, low: usize, high: usize) {
        let Some(last) = self.products.len().checked_sub(1) else {
            return;
        };
        let high = high.min(last);
        if low < high {
            let pivot = self.partition_by_price(low, high);
            if pivot > low {
                self.sort_by_price_range(low, pivot - 1);
            }
            self.sort_by_price_range(pivot + 1, high);
        }
    }

    /// Lomuto partition around `products[high].price`, returning the pivot's final index
    fn partition_by_price(&mut self, low: usize, high: usize) -> usize {
        let pivot = self.products[high].price;
        let mut boundary = low;
        for j in low..high {
            if self.products[j].price < pivot {
                self.products.swap(boundary, j);
                boundary += 1;
            }
        }
        self.products.swap(boundary, high);
        boundary
    }

    /// Sort by ascending id (stable), enabling [`Catalog::binary_search`]
    pub fn sort_by_id(&mut self) {
        self.products.sort_by_key(|p| p.id);
    }

    /// Check whether ids are in ascending order
    pub fn is_sorted_by_id(&self) -> bool {
        self.products.windows(2).all(|w| w[0].id <= w[1].id)
    }

    /// Index of the first entry with this id, scanning front to back
    pub fn linear_search(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    /// Index of an entry with this id, assuming ascending id order
    pub fn binary_search(&self, id: ProductId) -> Option<usize> {
        let mut low = 0;
        let mut high = self.products.len();
        while low < high {
            let mid = low + (high - low) / 2;
            match self.products[mid].id.cmp(&id) {
                Ordering::Equal => return Some(mid),
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
            }
        }
        None
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("products", &self.products)
            .finish_non_exhaustive()
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for product in iter {
            catalog.add(product);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices(catalog: &Catalog) -> Vec<f64> {
        catalog.products().iter().map(|p| p.price).collect()
    }

    #[test]
    fn partition_places_pivot_at_its_rank() {
        let mut catalog: Catalog = [5.0, 1.0, 4.0, 2.0, 3.0]
            .iter()
            .enumerate()
            .map(|(i, &price)| Product::new(i as ProductId, "p", price, 1))
            .collect();

        let pivot = catalog.partition_by_price(0, 4);
        assert_eq!(pivot, 2);
        assert_eq!(catalog.products()[2].price, 3.0);
        assert!(catalog.products()[..2].iter().all(|p| p.price < 3.0));
        assert!(catalog.products()[3..].iter().all(|p| p.price >= 3.0));
    }

    #[test]
    fn price_range_sort_leaves_outside_untouched() {
        let mut catalog: Catalog = [9.0, 3.0, 2.0, 1.0, 0.5]
            .iter()
            .enumerate()
            .map(|(i, &price)| Product::new(i as ProductId, "p", price, 1))
            .collect();

        catalog.sort_by_price_range(1, 3);
        assert_eq!(prices(&catalog), vec![9.0, 1.0, 2.0, 3.0, 0.5]);
    }

    #[test]
    fn price_range_sort_clamps_high_index() {
        let mut catalog: Catalog = [3.0, 1.0, 2.0]
            .iter()
            .enumerate()
            .map(|(i, &price)| Product::new(i as ProductId, "p", price, 1))
            .collect();

        catalog.sort_by_price_range(0, 100);
        assert_eq!(prices(&catalog), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn binary_search_on_unsorted_data_does_not_panic() {
        let catalog: Catalog = [7, 3, 9, 1]
            .iter()
            .map(|&id| Product::new(id, "p", 1.0, 1))
            .collect();

        assert!(!catalog.is_sorted_by_id());
        // Result is unspecified; only termination matters here
        let _ = catalog.binary_search(1);
        let _ = catalog.binary_search(42);
    }
}
