//! To-do details modal.
//!
//! Overlay showing the selected to-do and the user it is assigned to.

use crate::app::App;
use crate::ui::loader::render_loader;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const MODAL_WIDTH: u16 = 60;
const MODAL_HEIGHT: u16 = 12;

/// Centered rectangle of at most `width` x `height` inside `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the details modal over `area`.
///
/// # Details
/// Nothing is drawn when no to-do is selected. While the user is loading
/// the body shows a spinner instead of the details.
pub fn render_modal(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(todo) = app.selected_todo.as_ref() else {
        return;
    };

    let popup = centered_rect(area, MODAL_WIDTH, MODAL_HEIGHT);
    Widget::render(Clear, popup, buf);

    let block = Block::default()
        .title(format!("Todo #{}", todo.id))
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::White));

    if app.is_loading_user {
        let inner = block.inner(popup);
        Widget::render(block, popup, buf);
        render_loader(app.tick, "Loading user", inner, buf);
        return;
    }

    let status_color = if todo.completed {
        Color::Green
    } else {
        Color::Yellow
    };

    let mut lines = vec![
        Line::from(Span::styled(
            todo.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::Cyan)),
            Span::styled(todo.status_label(), Style::default().fg(status_color)),
        ]),
    ];

    match app.selected_user.as_ref() {
        Some(user) => {
            let mut by = vec![
                Span::styled("by ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    user.name.as_str(),
                    Style::default().add_modifier(Modifier::UNDERLINED),
                ),
            ];
            if let Some(username) = user.username.as_deref() {
                by.push(Span::styled(
                    format!(" (@{})", username),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines.push(Line::from(by));
            lines.push(Line::from(vec![
                Span::styled("Email: ", Style::default().fg(Color::Cyan)),
                Span::raw(user.email.as_str()),
            ]));
            let extras = [("Phone: ", user.phone.as_deref()), ("Web: ", user.website.as_deref())];
            for (label, value) in extras {
                if let Some(value) = value {
                    lines.push(Line::from(vec![
                        Span::styled(label, Style::default().fg(Color::Cyan)),
                        Span::raw(value),
                    ]));
                }
            }
        }
        None => lines.push(Line::from(Span::styled(
            "User details unavailable",
            Style::default().fg(Color::Red),
        ))),
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Esc: close  m: email user",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    Widget::render(paragraph, popup, buf);
}
