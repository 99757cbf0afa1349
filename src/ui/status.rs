//! Status bar rendering.

use crate::app::{App, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const LIST_HELP: &str =
    "q: quit  j/k: move  Enter: details  /: search  x: clear  f/1-3: filter  r: reload";
const SEARCH_HELP: &str = "Type to search  Backspace: delete  Ctrl+U: clear  Enter/Esc: done";
const MODAL_HELP: &str = "Esc/q: close  m: email user";

/// Render the status bar.
///
/// # Details
/// Shows the last status message (or key help) and when the list was loaded.
pub fn render_status(app: &App, area: Rect, buf: &mut Buffer) {
    let help = if app.is_modal_open {
        MODAL_HELP
    } else if app.mode == UiMode::Search {
        SEARCH_HELP
    } else {
        LIST_HELP
    };

    let mut spans = vec![Span::raw(app.status_message.as_deref().unwrap_or("Ready"))];
    if let Some(loaded_at) = app.loaded_at {
        spans.push(Span::styled(
            format!("  (updated {})", loaded_at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().title(help).borders(Borders::ALL));

    Widget::render(paragraph, area, buf);
}
