//! Filters widget rendering.
//!
//! Displays the completion status options with the active one highlighted.

use crate::app::App;
use crate::filter::StatusFilter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the filters widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Shows the three status options separated by bars, followed by the
/// visible/total counts.
pub fn render_filters(app: &App, area: Rect, buf: &mut Buffer) {
    let mut spans = Vec::new();
    for (i, filter) in StatusFilter::ALL.iter().enumerate() {
        let is_active = *filter == app.filter;
        let style = if is_active {
            Style::default()
                .fg(Color::Yellow)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }

        let text = if is_active {
            format!("▶ {}:{} ◀", i + 1, filter.label())
        } else {
            format!("  {}:{}  ", i + 1, filter.label())
        };
        spans.push(Span::styled(text, style));
    }

    spans.push(Span::styled(
        format!(
            "   showing {} of {}",
            app.visible_todos.len(),
            app.todos.len()
        ),
        Style::default().fg(Color::Cyan),
    ));

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().title("Filter (press 'f')").borders(Borders::ALL));

    Widget::render(paragraph, area, buf);
}
