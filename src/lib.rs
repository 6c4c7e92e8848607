//! # Introduction
//!
//! Storefront is an in-memory inventory and shopping-cart engine built from
//! classic data structures, driven through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Structures
//!
//! ```text
//! Catalog (Vec) ──snapshot──▶ Cart (linked list) ──checkout──▶ OrderQueue (FIFO)
//!        │
//!        └──────snapshot──▶ ViewHistory (LIFO)
//!
//! RecommendationGraph (adjacency list, DFS) ── queried by product id
//! ```
//!
//! 1. [`inventory`]: the [`inventory::Product`] value type and the catalog,
//!    cart, view history and order queue that hold products.
//! 2. [`recommend`]: the directed recommendation graph.
//! 3. [`shop`]: the [`shop::Shop`] facade coordinating the structures,
//!    including the atomic reserve (stock check + cart append + decrement).
//! 4. [`timing`]: injectable sinks for the name-sort timing line.
//! 5. [`errors`]: [`errors::ShopError`], the non-fatal outcome type.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Catalog: bubble sort by name, quicksort by price, linear and binary search
//! by id. Graph: depth-first pre-order reachability.

pub mod errors;
pub mod inventory;
pub mod recommend;
pub mod shop;
pub mod timing;
pub mod ui;
