//! Output pane rendering

use super::utils::{border_style, clamp_scroll};
use crate::ui::theme::DEFAULT_THEME;
use crate::ui::transcript::Transcript;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the output pane
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    transcript: &Transcript,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines = transcript.get_output();

    if lines.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
    } else {
        let block = block.padding(Padding::new(1, 0, 0, 0));

        let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
        clamp_scroll(scroll_offset, lines.len(), visible_height);

        let visible_items: Vec<ListItem> = lines
            .iter()
            .skip(*scroll_offset)
            .take(visible_height)
            .map(|line| ListItem::new(line.as_str()).style(Style::default().fg(DEFAULT_THEME.fg)))
            .collect();

        let list = List::new(visible_items).block(block);
        frame.render_widget(list, area);
    }
}
