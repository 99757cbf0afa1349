//! Keyboard and mouse handling.
//!
//! Turns terminal input into state changes on `App` plus the side effects
//! the event loop has to run.

use crate::app::{App, UiMode, UserRequest};
use crate::filter::StatusFilter;
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Side effect requested by an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Nothing to do beyond redrawing
    None,
    /// Leave the application
    Quit,
    /// (Re)fetch the to-do list
    LoadTodos,
    /// Fetch the owner of the selected to-do
    LoadUser(UserRequest),
    /// Open a mail client for this address
    OpenMail(String),
}

impl From<Option<UserRequest>> for Command {
    fn from(request: Option<UserRequest>) -> Self {
        request.map_or(Command::None, Command::LoadUser)
    }
}

/// Handle a key press.
///
/// # Details
/// The modal captures all keys while open; otherwise keys are interpreted
/// according to the current `UiMode`.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Command {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Command::Quit;
    }

    if app.is_modal_open {
        return handle_modal_key(app, key);
    }

    match app.mode {
        UiMode::List => handle_list_key(app, key),
        UiMode::Search => handle_search_key(app, key),
    }
}

fn handle_modal_key(app: &mut App, key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_modal();
            Command::None
        }
        KeyCode::Char('m') => match &app.selected_user {
            Some(user) => Command::OpenMail(user.email.clone()),
            None => Command::None,
        },
        _ => Command::None,
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_up();
            Command::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_down();
            Command::None
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.select_current().into(),
        KeyCode::Char('/') => {
            app.mode = UiMode::Search;
            Command::None
        }
        KeyCode::Char('x') => {
            app.clear_query();
            Command::None
        }
        KeyCode::Char('f') | KeyCode::Tab => {
            app.cycle_filter(true);
            Command::None
        }
        KeyCode::Char('F') | KeyCode::BackTab => {
            app.cycle_filter(false);
            Command::None
        }
        KeyCode::Char(c @ '1'..='3') => {
            let index = (c as usize) - ('1' as usize);
            app.set_filter(StatusFilter::ALL[index]);
            Command::None
        }
        KeyCode::Char('r') if !app.is_loading_todos => Command::LoadTodos,
        _ => Command::None,
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.mode = UiMode::List,
        KeyCode::Backspace => app.pop_query_char(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => app.clear_query(),
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            app.push_query_char(c)
        }
        _ => {}
    }
    Command::None
}

/// Handle mouse events (scroll and click).
///
/// # Arguments
/// * `app` - Application state
/// * `mouse` - Mouse event
/// * `list_area` - Area of the to-do table as last rendered
///
/// # Details
/// Scrolling moves the cursor; a left click on a row selects that to-do.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, list_area: Rect) -> Command {
    if app.is_modal_open || app.mode != UiMode::List {
        return Command::None;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => app.move_up(),
        MouseEventKind::ScrollDown => app.move_down(),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = ui::list::row_at(app, list_area, mouse.column, mouse.row) {
                app.set_cursor(index);
                return app.select_current().into();
            }
        }
        _ => {}
    }
    Command::None
}
