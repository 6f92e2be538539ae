//! Input line pane rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the input line.
///
/// Shows the current prompt and buffer while an entry mode is active, and a
/// short hint otherwise.
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    prompt: &str,
    buffer: &str,
    is_active: bool,
) {
    let border_style = if is_active {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Input ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let line = if is_active {
        Line::from(vec![
            Span::styled(
                format!("{} ", prompt),
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
            Span::styled(
                buffer.to_string(),
                Style::default().fg(DEFAULT_THEME.number),
            ),
            Span::styled(
                "▏",
                Style::default().fg(DEFAULT_THEME.border_focused),
            ),
        ])
    } else {
        Line::from(Span::styled(
            "(choose an operation from the menu)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))
    };

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
