//! Main TUI application state and logic

use super::action::{Action, Prompt};
use super::panes::utils::{format_line_item, format_price};
use super::transcript::Transcript;
use crate::errors::ShopError;
use crate::inventory::{CartSummary, ProductId};
use crate::shop::Shop;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Catalog,
    Cart,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane (catalog -> cart -> output)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Catalog => FocusedPane::Cart,
            FocusedPane::Cart => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Catalog,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Catalog => FocusedPane::Output,
            FocusedPane::Cart => FocusedPane::Catalog,
            FocusedPane::Output => FocusedPane::Cart,
        }
    }
}

/// The main application state
pub struct App {
    /// The shop being driven
    pub shop: Shop,

    /// Report lines written by actions
    pub transcript: Transcript,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub catalog_scroll: usize,
    pub cart_scroll: usize,
    pub output_scroll: usize,

    /// Argument prompt for the action being entered, if any
    pub prompt: Option<Prompt>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app driving the given shop
    pub fn new(shop: Shop) -> Self {
        App {
            shop,
            transcript: Transcript::new(),
            focused_pane: FocusedPane::Catalog,
            catalog_scroll: 0,
            cart_scroll: 0,
            output_scroll: 0,
            prompt: None,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes above, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        // Left column: Catalog (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        // Right column: Menu | Cart | Recently viewed | Pending orders
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Action::ALL.len() as u16 + 3),
                Constraint::Percentage(40),
                Constraint::Percentage(30),
                Constraint::Percentage(30),
            ])
            .split(columns[1]);

        super::panes::render_catalog_pane(
            frame,
            left_rows[0],
            self.shop.catalog(),
            self.focused_pane == FocusedPane::Catalog,
            &mut self.catalog_scroll,
        );

        super::panes::render_output_pane(
            frame,
            left_rows[1],
            &self.transcript,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_menu_pane(
            frame,
            right_rows[0],
            self.prompt.as_ref().map(|p| p.action),
        );

        super::panes::render_cart_pane(
            frame,
            right_rows[1],
            self.shop.cart(),
            self.focused_pane == FocusedPane::Cart,
            &mut self.cart_scroll,
        );

        super::panes::render_history_pane(frame, right_rows[2], self.shop.history());
        super::panes::render_orders_pane(frame, right_rows[3], self.shop.orders());

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.prompt.as_ref(),
            self.shop.cart().len(),
            self.shop.orders().len(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll_mut();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll_mut();
                *scroll = scroll.saturating_add(1);
            }
            code => {
                if let Some(action) = Action::from_key(code) {
                    self.start_action(action);
                }
            }
        }
    }

    fn focused_scroll_mut(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Catalog => &mut self.catalog_scroll,
            FocusedPane::Cart => &mut self.cart_scroll,
            FocusedPane::Output => &mut self.output_scroll,
        }
    }

    /// Keys while an argument prompt is open
    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.prompt = None;
                self.status_message = "Cancelled".to_string();
            }
            KeyCode::Backspace => {
                prompt.buffer.pop();
            }
            KeyCode::Char(c) => {
                prompt.buffer.push(c);
            }
            KeyCode::Enter => {
                if prompt.commit_field() {
                    if let Some(done) = self.prompt.take() {
                        self.dispatch(done.action, &done.values);
                    }
                } else {
                    self.status_message = format!("{}?", prompt.current_label());
                }
            }
            _ => {}
        }
    }

    /// Run an action immediately or open a prompt for its arguments
    pub fn start_action(&mut self, action: Action) {
        if action.fields().is_empty() {
            self.dispatch(action, &[]);
        } else {
            let prompt = Prompt::new(action);
            self.status_message = format!("{}: {}?", action.label(), prompt.current_label());
            self.prompt = Some(prompt);
        }
    }

    /// Execute an action with its collected arguments
    pub fn dispatch(&mut self, action: Action, values: &[String]) {
        debug!(?action, ?values, "dispatch");
        let result = self.execute(action, values);
        match result {
            Ok(status) => self.status_message = status,
            Err(message) => {
                self.transcript.print(&message);
                self.status_message = message;
            }
        }
        // Auto-scroll output to bottom
        self.output_scroll = usize::MAX;
    }

    /// Perform an action, writing its report to the transcript
    ///
    /// Returns the status line on success, or a message when the arguments
    /// could not be parsed.
    fn execute(&mut self, action: Action, values: &[String]) -> Result<String, String> {
        match action {
            Action::ViewProduct => {
                let id = parse_arg::<ProductId>(values, 0, "product ID")?;
                match self.shop.view_product(id) {
                    Ok(product) => self.transcript.print(product.to_string()),
                    Err(_) => self.transcript.print("Product not found."),
                }
                Ok(format!("Viewed product {}", id))
            }
            Action::AddToCart => {
                let id = parse_arg::<ProductId>(values, 0, "product ID")?;
                let quantity = parse_arg::<u32>(values, 1, "quantity")?;
                match self.shop.reserve(id, quantity) {
                    Ok(item) => {
                        self.transcript.print(format!(
                            "{} x {} added to cart.",
                            item.quantity, item.product.name
                        ));
                        Ok("Added to cart".to_string())
                    }
                    Err(e) => {
                        debug!(id = ?e.product_id(), error = %e, "reserve rejected");
                        self.transcript.print("Invalid ID or insufficient stock.");
                        Ok(e.to_string())
                    }
                }
            }
            Action::ViewCart => {
                let summary = self.shop.cart_summary();
                if summary.is_empty() {
                    self.transcript.print("Cart is empty.");
                } else {
                    self.transcript.print("Your Cart:");
                    self.print_summary(&summary);
                }
                Ok(format!("Cart total {}", format_price(summary.total)))
            }
            Action::RemoveFromCart => {
                let id = parse_arg::<ProductId>(values, 0, "product ID")?;
                if self.shop.cart().is_empty() {
                    self.transcript.print("Cart is empty.");
                    return Ok("Cart is empty".to_string());
                }
                match self.shop.remove_from_cart(id) {
                    Ok(_) => self.transcript.print("Product removed from cart."),
                    Err(_) => self.transcript.print("Product not found in cart."),
                }
                Ok(format!("Remove {} from cart", id))
            }
            Action::UpdateQuantity => {
                let id = parse_arg::<ProductId>(values, 0, "product ID")?;
                let quantity = parse_arg::<u32>(values, 1, "quantity")?;
                match self.shop.update_cart_quantity(id, quantity) {
                    Ok(()) => self.transcript.print("Quantity updated."),
                    Err(_) => self.transcript.print("Product not found in cart."),
                }
                Ok(format!("Update quantity of {}", id))
            }
            Action::Checkout => match self.shop.checkout() {
                Ok(summary) => {
                    self.transcript.print("Checking out...");
                    self.transcript.print("Your Cart:");
                    self.print_summary(&summary);
                    self.transcript.print("Cart cleared.");
                    Ok(format!("{} order(s) queued", summary.items.len()))
                }
                Err(ShopError::CartEmpty) => {
                    self.transcript.print("Cart is empty.");
                    Ok("Cart is empty".to_string())
                }
                Err(e) => Ok(e.to_string()),
            },
            Action::RecentlyViewed => {
                let viewed = self.shop.recently_viewed();
                if viewed.is_empty() {
                    self.transcript.print("No recently viewed products.");
                } else {
                    self.transcript.print("Recently Viewed Products:");
                    for product in &viewed {
                        self.transcript.print(product.to_string());
                    }
                }
                Ok(format!("{} viewed product(s)", viewed.len()))
            }
            Action::Recommendations => {
                let id = parse_arg::<ProductId>(values, 0, "product ID")?;
                match self.shop.recommendations(id) {
                    Ok(names) => {
                        let origin = names.first().cloned().unwrap_or_default();
                        self.transcript.print(format!(
                            "Recommended Products from {}: {}",
                            origin,
                            names.join(" ")
                        ));
                        Ok(format!("{} product(s) reachable", names.len()))
                    }
                    Err(e) => {
                        self.transcript.print(format!("{}.", e));
                        Ok(e.to_string())
                    }
                }
            }
            Action::RemoveProduct => {
                let id = parse_arg::<ProductId>(values, 0, "product ID")?;
                match self.shop.remove_product(id) {
                    Ok(()) => self
                        .transcript
                        .print(format!("Product with ID {} removed.", id)),
                    Err(_) => self.transcript.print("Product not found."),
                }
                Ok(format!("Remove product {}", id))
            }
            Action::UpdateProduct => {
                let id = parse_arg::<ProductId>(values, 0, "product ID")?;
                let name = values.get(1).cloned().unwrap_or_default();
                let price = parse_arg::<f64>(values, 2, "price")?;
                let stock = parse_arg::<u32>(values, 3, "stock")?;
                match self.shop.update_product(id, name, price, stock) {
                    Ok(()) => self.transcript.print("Product updated successfully."),
                    Err(_) => self.transcript.print("Product not found."),
                }
                Ok(format!("Update product {}", id))
            }
            Action::SortByName => {
                let elapsed = self.shop.sort_by_name();
                self.transcript.print("Products sorted by name.");
                self.catalog_scroll = 0;
                Ok(format!("Sorted by name in {} µs", elapsed.as_micros()))
            }
            Action::SortByPrice => {
                self.shop.sort_by_price();
                self.transcript.print("Products sorted by price.");
                self.catalog_scroll = 0;
                Ok("Sorted by price".to_string())
            }
            Action::SortById => {
                self.shop.sort_by_id();
                self.transcript.print("Products sorted by id.");
                self.catalog_scroll = 0;
                Ok("Sorted by id".to_string())
            }
            Action::BinarySearch => {
                let id = parse_arg::<ProductId>(values, 0, "product ID")?;
                let sorted = self.shop.catalog().is_sorted_by_id();
                self.print_search_result(self.shop.search(id));
                if sorted {
                    Ok(format!("Binary search for {}", id))
                } else {
                    Ok("Catalog is not sorted by id; binary search may miss".to_string())
                }
            }
            Action::LinearSearch => {
                let id = parse_arg::<ProductId>(values, 0, "product ID")?;
                self.print_search_result(self.shop.find(id));
                Ok(format!("Linear search for {}", id))
            }
            Action::ProcessOrders => {
                let processed = self.shop.process_orders();
                if processed.is_empty() {
                    self.transcript.print("No orders to process.");
                } else {
                    self.transcript.print("Processing Orders:");
                    for order in &processed {
                        self.transcript
                            .print(format!("Order processed for product: {}", order.name));
                    }
                }
                Ok(format!("{} order(s) processed", processed.len()))
            }
        }
    }

    fn print_summary(&mut self, summary: &CartSummary) {
        for item in &summary.items {
            self.transcript.print(format_line_item(item));
        }
        self.transcript
            .print(format!("Total: {}", format_price(summary.total)));
    }

    fn print_search_result(
        &mut self,
        result: Result<(usize, crate::inventory::Product), ShopError>,
    ) {
        match result {
            Ok((_, product)) => {
                self.transcript.print("Product found:");
                self.transcript.print(product.to_string());
            }
            Err(_) => self.transcript.print("Product not found."),
        }
    }
}

/// Parse the argument at `index`, describing the field on failure
fn parse_arg<T: FromStr>(values: &[String], index: usize, field: &str) -> Result<T, String> {
    let raw = values.get(index).map(|s| s.trim()).unwrap_or("");
    raw.parse::<T>()
        .map_err(|_| format!("Invalid {}: '{}'", field, raw))
}
