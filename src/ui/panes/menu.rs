//! Menu pane listing every action and its hotkey

use super::utils::border_style;
use crate::ui::action::Action;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the menu pane, highlighting the action whose prompt is open
pub fn render_menu_pane(frame: &mut Frame, area: Rect, active: Option<Action>) {
    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(border_style(false));

    let mut items: Vec<ListItem> = Action::ALL
        .iter()
        .map(|&action| {
            let label_style = if Some(action) == active {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", action.key()),
                    Style::default()
                        .fg(DEFAULT_THEME.key)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(action.label(), label_style),
            ]))
        })
        .collect();

    items.push(ListItem::new(Line::from(vec![
        Span::styled(
            " q ",
            Style::default()
                .fg(DEFAULT_THEME.key)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("Exit", Style::default().fg(DEFAULT_THEME.comment)),
    ])));

    frame.render_widget(List::new(items).block(block), area);
}
