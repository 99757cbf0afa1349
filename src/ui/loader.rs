//! Loading indicator.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for a frame counter.
pub fn spinner_frame(tick: usize) -> &'static str {
    FRAMES[tick % FRAMES.len()]
}

/// Render a centered spinner with a label.
///
/// # Arguments
/// * `tick` - Frame counter
/// * `label` - What is being loaded
/// * `area` - Area to render in (without borders)
/// * `buf` - Buffer to render to
pub fn render_loader(tick: usize, label: &str, area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }

    let line = Line::from(vec![
        Span::styled(spinner_frame(tick), Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::styled(format!("{}...", label), Style::default().fg(Color::Gray)),
    ]);

    let row = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    Widget::render(Paragraph::new(line).alignment(Alignment::Center), row, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_util::buffer_text;

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(0), spinner_frame(FRAMES.len()));
        assert_ne!(spinner_frame(0), spinner_frame(1));
    }

    #[test]
    fn test_render_loader_in_middle_row() {
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        render_loader(0, "Loading user", area, &mut buf);
        let text = buffer_text(&buf);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[2].contains("Loading user..."));
        assert!(lines[0].trim().is_empty());
    }
}
