//! Product recommendations
//!
//! - [`graph`]: directed adjacency-list graph with depth-first traversal
//!
//! Recommendations are pure reachability: the result lists every product that
//! can be reached from the start product, in the order a depth-first walk
//! meets them. There is no ranking or distance.

pub mod graph;

pub use graph::RecommendationGraph;
