//! History pane rendering

use crate::eval::ops::Operation;
use crate::history::History;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the calculation history pane.
///
/// Records are listed oldest first with a per-operation totals row at the
/// bottom.
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    history: &History,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" History ({}) ", history.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if history.is_empty() {
        let paragraph = Paragraph::new("(no calculations yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));

    let mut all_items: Vec<ListItem> = history
        .records()
        .iter()
        .map(|record| {
            ListItem::new(record.to_string())
                .style(Style::default().fg(DEFAULT_THEME.fg))
        })
        .collect();

    all_items.push(
        ListItem::new(summary_line(history))
            .style(Style::default().fg(DEFAULT_THEME.comment)),
    );

    // Clamp the scroll offset; usize::MAX parks the view at the bottom
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

/// Compact per-operation totals in menu order, zeros skipped.
fn summary_line(history: &History) -> String {
    let counts = history.tag_counts();

    let mut parts = Vec::new();
    for op in Operation::ALL {
        if let Some(count) = counts.get(&op) {
            parts.push(format!("{} x{}", op.tag(), count));
        }
    }

    parts.join("  ")
}
