//! To-do table widget rendering.
//!
//! Displays the visible to-dos with cursor highlighting and centered scrolling.

use crate::app::App;
use crate::ui::loader::render_loader;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

/// Rows taken by the top border and the header.
const ROWS_ABOVE_DATA: u16 = 2;

/// Number of data rows that fit in `area`.
fn visible_rows(area: Rect) -> usize {
    // borders + header
    area.height.saturating_sub(ROWS_ABOVE_DATA + 1).max(1) as usize
}

/// First visible row so that the cursor stays centered.
///
/// # Arguments
/// * `cursor` - Highlighted row
/// * `len` - Number of rows
/// * `visible` - Rows that fit on screen
pub fn scroll_offset(cursor: usize, len: usize, visible: usize) -> usize {
    let center = visible / 2;
    let offset = cursor.saturating_sub(center);
    offset.min(len.saturating_sub(visible))
}

/// Map a terminal cell to an index in `visible_todos`.
///
/// # Returns
/// * `Option<usize>` - Row index, or None when outside the data rows
pub fn row_at(app: &App, area: Rect, column: u16, row: u16) -> Option<usize> {
    let first_row = area.y + ROWS_ABOVE_DATA;
    let last_row = (area.y + area.height).saturating_sub(1); // bottom border
    if column <= area.x || column >= area.x + area.width.saturating_sub(1) {
        return None;
    }
    if row < first_row || row >= last_row {
        return None;
    }

    let len = app.visible_todos.len();
    let offset = scroll_offset(app.cursor, len, visible_rows(area));
    let index = offset + (row - first_row) as usize;
    (index < len).then_some(index)
}

/// Render the to-do table.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Columns: id, done mark, title (green when completed, red otherwise)
/// and a marker on the to-do currently open in the modal.
pub fn render_list(app: &App, area: Rect, buf: &mut Buffer) {
    let title = format!("Todos ({}/{})", app.visible_todos.len(), app.todos.len());
    let block = Block::default().title(title).borders(Borders::ALL);

    // Loader replaces the table while the list is fetched
    if app.is_loading_todos {
        let inner = block.inner(area);
        Widget::render(block, area, buf);
        render_loader(app.tick, "Loading todos", inner, buf);
        return;
    }

    // Handle empty list
    if app.visible_todos.is_empty() {
        let message = if app.todos.is_empty() {
            "No todos loaded (press 'r' to reload)"
        } else {
            "No todos match the current filter"
        };
        let paragraph = Paragraph::new(Span::styled(message, Style::default().fg(Color::Gray)))
            .block(block);
        Widget::render(paragraph, area, buf);
        return;
    }

    // Ensure cursor is valid, then scroll so it stays centered
    let len = app.visible_todos.len();
    let cursor = app.cursor.min(len - 1);
    let visible = visible_rows(area);
    let offset = scroll_offset(cursor, len, visible);
    let selected_id = app.selected_todo.as_ref().map(|t| t.id);

    let rows: Vec<Row> = app
        .visible_todos
        .iter()
        .skip(offset)
        .take(visible)
        .map(|todo| {
            let done = if todo.completed { "✓" } else { "" };
            let title_style = Style::default().fg(if todo.completed {
                Color::Green
            } else {
                Color::Red
            });
            let marker = if selected_id == Some(todo.id) { "●" } else { "○" };

            Row::new(vec![
                Cell::from(todo.id.to_string()),
                Cell::from(Span::styled(done, Style::default().fg(Color::Green))),
                Cell::from(Span::styled(todo.title.as_str(), title_style)),
                Cell::from(marker),
            ])
        })
        .collect();

    let header = Row::new(vec!["#", "✓", "Title", ""]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let widths = [
        Constraint::Length(5),
        Constraint::Length(2),
        Constraint::Min(10),
        Constraint::Length(2),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        );

    // Selection is relative to the rows actually rendered
    let mut state = TableState::default();
    state.select(Some(cursor - offset));

    StatefulWidget::render(table, area, buf, &mut state);
}
