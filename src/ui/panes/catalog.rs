//! Catalog pane rendering
//!
//! Shows every catalog entry in its current order as a table of id, name,
//! price and stock. The title carries the entry count and whether the order
//! currently satisfies the binary search precondition.

use super::utils::{border_style, clamp_scroll, format_price, stock_style};
use crate::inventory::Catalog;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Render the catalog pane
pub fn render_catalog_pane(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let order_hint = if catalog.is_sorted_by_id() {
        "id order"
    } else {
        "unsorted by id"
    };
    let block = Block::default()
        .title(format!(" Products ({}, {}) ", catalog.len(), order_hint))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if catalog.is_empty() {
        let paragraph = Paragraph::new("(no products)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // Borders and header row
    let visible_height = area.height.saturating_sub(3).max(1) as usize;
    clamp_scroll(scroll_offset, catalog.len(), visible_height);

    let rows: Vec<Row> = catalog
        .products()
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|product| {
            Row::new(vec![
                Cell::from(product.id.to_string()).style(Style::default().fg(DEFAULT_THEME.id)),
                Cell::from(product.name.clone()).style(Style::default().fg(DEFAULT_THEME.fg)),
                Cell::from(format_price(product.price))
                    .style(Style::default().fg(DEFAULT_THEME.price)),
                Cell::from(product.stock.to_string()).style(stock_style(product)),
            ])
        })
        .collect();

    let header = Row::new(vec!["ID", "Name", "Price", "Stock"]).style(
        Style::default()
            .fg(DEFAULT_THEME.heading)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Min(16),
            Constraint::Length(11),
            Constraint::Length(7),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}
