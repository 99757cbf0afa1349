//! Search widget rendering.
//!
//! Displays the title search input bar.

use crate::app::{App, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the search widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Displays a search input bar with the current query.
/// Highlights when in search mode and offers a clear hint when non-empty.
pub fn render_search(app: &App, area: Rect, buf: &mut Buffer) {
    let is_active = app.mode == UiMode::Search;
    let prompt = if is_active {
        "Search: "
    } else {
        "Search (press '/'): "
    };

    let mut spans = vec![
        Span::styled(prompt, Style::default().fg(Color::Yellow)),
        Span::styled(
            &app.query,
            Style::default().fg(if is_active { Color::White } else { Color::Gray }),
        ),
    ];
    if is_active {
        spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
    }

    let title = match (app.query.is_empty(), is_active) {
        (true, _) => "Search",
        (false, true) => "Search (Ctrl+U to clear)",
        (false, false) => "Search ('x' to clear)",
    };

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }),
    );

    Widget::render(paragraph, area, buf);
}
