//! Operation menu pane rendering

use crate::ui::app::MenuItem;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the operation menu.
///
/// `selected` indexes into [`MenuItem::ALL`]; `is_active` is false while an
/// entry mode has the keyboard.
pub fn render_menu_pane(
    frame: &mut Frame,
    area: Rect,
    selected: usize,
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
        .title(" Operations ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let shortcut = Span::styled(
                format!(" {} ", i + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            );

            let label_style = if i == selected {
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            let label = Span::styled(item.label(), label_style);

            let mut entry = ListItem::new(Line::from(vec![shortcut, label]));
            if i == selected {
                entry = entry.style(Style::default().bg(DEFAULT_THEME.selection_bg));
            }

            entry
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
