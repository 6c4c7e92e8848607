//! Status bar rendering with keybindings and input prompt

use crate::ui::action::Prompt;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// While a prompt is open the right half shows the field being typed instead
/// of the keybindings.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    prompt: Option<&Prompt>,
    cart_lines: usize,
    pending_orders: usize,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (mode_text, mode_color) = if prompt.is_some() {
        (" INPUT ", DEFAULT_THEME.secondary)
    } else {
        (" MENU ", DEFAULT_THEME.primary)
    };

    let left_spans = vec![
        Span::styled(
            mode_text,
            Style::default()
                .bg(mode_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" cart {} | orders {} ", cart_lines, pending_orders),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let right_spans = match prompt {
        Some(prompt) => vec![
            Span::styled(
                format!(" {}: ", prompt.current_label()),
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{}█ ", prompt.buffer), desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ↵ ", key_style),
            Span::styled(" accept ", desc_style),
            Span::styled(" esc ", key_style),
            Span::styled(" cancel ", desc_style),
        ],
        None => vec![
            Span::styled(" ⇥ ", key_style),
            Span::styled(" focus ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ↑/↓ ", key_style),
            Span::styled(" scroll ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled("q", key_style),
            Span::styled(" quit ", desc_style),
        ],
    };

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
