//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into five layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, argument prompts
//! - **[`action`]**: menu entries, their hotkeys and the fields each one asks for
//! - **[`panes`]**: stateless render functions for each visible pane (catalog, cart,
//!   history, orders, menu, output, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//! - **[`transcript`]**: line buffer behind the output pane
//!
//! The entry point for consumers is [`App`]: construct it with a [`Shop`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Shop`]: crate::shop::Shop
//! [`App::run`]: app::App::run

pub mod action;
pub mod app;
pub mod panes;
pub mod theme;
pub mod transcript;

pub use app::App;
