//! Shared helpers for pane rendering
//!
//! Formatting used by more than one pane, and by the app when it writes the
//! same rows to the output transcript.

use crate::inventory::{LineItem, Product};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style for a pane depending on focus
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Price with a dollar sign and two decimals
pub(crate) fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// `Name x qty = $subtotal`, padded like the cart listing
pub(crate) fn format_line_item(item: &LineItem) -> String {
    format!(
        "{:<25} x {:<3} = {}",
        item.product.name,
        item.quantity,
        format_price(item.subtotal())
    )
}

/// Style for a stock count; empty stock stands out
pub(crate) fn stock_style(product: &Product) -> Style {
    if product.stock == 0 {
        Style::default()
            .fg(DEFAULT_THEME.low_stock)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

/// Clamp a scroll offset so the last page stays full
pub(crate) fn clamp_scroll(scroll_offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }
}
