//! Recently viewed and pending order panes
//!
//! Both panes list product snapshots without scrolling: the view history from
//! the most recent view down, the order queue from the oldest submission down.

use super::utils::{border_style, format_price};
use crate::inventory::{OrderQueue, Product, ViewHistory};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the recently viewed pane
pub fn render_history_pane(frame: &mut Frame, area: Rect, history: &ViewHistory) {
    render_snapshot_list(
        frame,
        area,
        format!(" Recently Viewed ({}) ", history.len()),
        history.iter(),
        "No recently viewed products.",
    );
}

/// Render the pending orders pane
pub fn render_orders_pane(frame: &mut Frame, area: Rect, orders: &OrderQueue) {
    render_snapshot_list(
        frame,
        area,
        format!(" Pending Orders ({}) ", orders.len()),
        orders.pending(),
        "No orders to process.",
    );
}

fn render_snapshot_list<'a>(
    frame: &mut Frame,
    area: Rect,
    title: String,
    products: impl Iterator<Item = &'a Product>,
    empty_text: &'static str,
) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(false));

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let items: Vec<ListItem> = products
        .take(visible_height)
        .map(|product| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<4}", product.id),
                    Style::default().fg(DEFAULT_THEME.id),
                ),
                Span::styled(product.name.clone(), Style::default().fg(DEFAULT_THEME.fg)),
                Span::raw(" "),
                Span::styled(
                    format_price(product.price),
                    Style::default().fg(DEFAULT_THEME.price),
                ),
            ]))
        })
        .collect();

    if items.is_empty() {
        let paragraph = Paragraph::new(empty_text)
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
    } else {
        frame.render_widget(List::new(items).block(block), area);
    }
}
