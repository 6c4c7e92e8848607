//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! one module per pane.
//!
//! # Pane Modules
//!
//! - [`catalog`]: Product table in current catalog order
//! - [`cart`]: Cart line items and running total
//! - [`history`]: Recently viewed products and pending orders
//! - [`menu`]: Action hotkeys
//! - [`output`]: Transcript of action reports
//! - [`status`]: Status bar with mode, counters, keybindings and input prompt
//! - `utils`: Shared formatting and scroll helpers
//!
//! Each pane module exports a stateless `render_*` function; scroll offsets
//! live in [`crate::ui::app::App`] and are passed in by reference.

pub(crate) mod utils;

pub mod cart;
pub mod catalog;
pub mod history;
pub mod menu;
pub mod output;
pub mod status;

// Re-export render functions for convenience
pub use cart::render_cart_pane;
pub use catalog::render_catalog_pane;
pub use history::{render_history_pane, render_orders_pane};
pub use menu::render_menu_pane;
pub use output::render_output_pane;
pub use status::render_status_bar;
