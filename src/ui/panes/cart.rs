//! Cart pane rendering

use super::utils::{border_style, clamp_scroll, format_price};
use crate::inventory::Cart;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the cart pane with one row per line item and the running total in the title
pub fn render_cart_pane(
    frame: &mut Frame,
    area: Rect,
    cart: &Cart,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Cart (Total: {}) ", format_price(cart.total())))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if cart.is_empty() {
        let paragraph = Paragraph::new("Cart is empty.")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, cart.len(), visible_height);

    let items: Vec<ListItem> = cart
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    item.product.name.clone(),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                Span::styled(
                    format!(" x {}", item.quantity),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::raw(" = "),
                Span::styled(
                    format_price(item.subtotal()),
                    Style::default()
                        .fg(DEFAULT_THEME.price)
                        .add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
