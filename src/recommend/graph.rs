//! Directed recommendation graph
//!
//! Adjacency lists keyed by product id, plus a display name per id. Edges keep
//! insertion order and may repeat. The graph has no link to the catalog: names
//! are copied in when the graph is built.

use crate::errors::ShopError;
use crate::inventory::ProductId;
use rustc_hash::{FxHashMap, FxHashSet};

/// Product-to-product recommendation edges
#[derive(Debug, Clone, Default)]
pub struct RecommendationGraph {
    adjacency: FxHashMap<ProductId, Vec<ProductId>>,
    names: FxHashMap<ProductId, String>,
}

impl RecommendationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the display name for an id
    pub fn add_product_name(&mut self, id: ProductId, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    /// Add a directed edge; duplicates are kept
    pub fn add_edge(&mut self, from: ProductId, to: ProductId) {
        self.adjacency.entry(from).or_default().push(to);
    }

    /// Display name for an id
    pub fn name(&self, id: ProductId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Outgoing edges in insertion order
    pub fn neighbors(&self, id: ProductId) -> &[ProductId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of ids with a registered name
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Ids reachable from `start` in depth-first pre-order
    ///
    /// Returns `None` when `start` has no registered name. Each id appears
    /// once; the start id is always first.
    pub fn reachable(&self, start: ProductId) -> Option<Vec<ProductId>> {
        if !self.names.contains_key(&start) {
            return None;
        }

        let mut order = Vec::new();
        let mut visited = FxHashSet::default();
        let mut pending = vec![start];

        // Visited-on-pop with reversed pushes reproduces recursive pre-order
        while let Some(id) = pending.pop() {
            if !visited.insert(id) {
                continue;
            }
            order.push(id);
            for &next in self.neighbors(id).iter().rev() {
                if !visited.contains(&next) {
                    pending.push(next);
                }
            }
        }

        Some(order)
    }

    /// Display names reachable from `start` in depth-first pre-order
    ///
    /// Reachable ids without a registered name are shown as `#<id>`.
    pub fn recommend(&self, start: ProductId) -> Result<Vec<String>, ShopError> {
        let order = self
            .reachable(start)
            .ok_or(ShopError::NotInGraph { id: start })?;

        Ok(order
            .into_iter()
            .map(|id| match self.name(id) {
                Some(name) => name.to_string(),
                None => format!("#{}", id),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(ids: &[ProductId]) -> RecommendationGraph {
        let mut graph = RecommendationGraph::new();
        for &id in ids {
            graph.add_product_name(id, format!("P{}", id));
        }
        graph
    }

    #[test]
    fn preorder_follows_edge_insertion_order() {
        let mut graph = named(&[1, 2, 3, 5]);
        graph.add_edge(1, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 5);

        assert_eq!(graph.reachable(1), Some(vec![1, 2, 5, 3]));
    }

    #[test]
    fn isolated_node_yields_only_itself() {
        let graph = named(&[4]);
        assert_eq!(graph.recommend(4), Ok(vec!["P4".to_string()]));
    }

    #[test]
    fn cycle_visits_each_node_once() {
        let mut graph = named(&[1, 2, 3]);
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 1);
        graph.add_edge(3, 2);

        assert_eq!(graph.reachable(2), Some(vec![2, 3, 1]));
    }

    #[test]
    fn shared_descendant_is_not_repeated() {
        let mut graph = named(&[1, 2, 3, 5]);
        graph.add_edge(1, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 5);
        graph.add_edge(3, 5);
        graph.add_edge(1, 2);

        assert_eq!(graph.reachable(1), Some(vec![1, 2, 5, 3]));
    }

    #[test]
    fn unknown_start_is_reported() {
        let mut graph = named(&[1]);
        graph.add_edge(9, 1);
        assert_eq!(graph.recommend(9), Err(ShopError::NotInGraph { id: 9 }));
    }

    #[test]
    fn unnamed_neighbor_uses_id_placeholder() {
        let mut graph = named(&[1]);
        graph.add_edge(1, 8);
        assert_eq!(
            graph.recommend(1),
            Ok(vec!["P1".to_string(), "#8".to_string()])
        );
    }
}
